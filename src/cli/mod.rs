use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::Parser;
use gvid::{
    codec::entropy::EntropyCoder,
    decode_video,
    demuxers::raw_video_demuxer::RawVideoDemuxer,
    encode_video, frames_to_rgb24,
    image::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    muxers::{raw_file_muxer::RawFileMuxer, Muxer},
    pixel_formats::{Rgb24, Yuv420p},
    stream::FrameStream,
    CompressionLevel, EntropyBackend, PartialCodecConfig,
};
use tracing::{debug, info};

const ENCODED_YUV_FILE: &str = "encoded.yuv";
const DECODED_YUV_FILE: &str = "decoded.yuv";
const DECODED_RGB_FILE: &str = "decoded.rgb24";

/// Encode raw rgb24 video, decode it again, and write every stage to disk.
#[derive(Parser, Debug)]
#[command(name = "gvid")]
#[command(version)]
#[command(about = "Toy video codec: YUV420p, temporal deltas and DEFLATE")]
#[command(long_about = "Reads back to back rgb24 frames, encodes them and decodes the result.\n\n\
    EXAMPLES:\n    \
    cat video.rgb24 | gvid\n    \
    gvid -i video.rgb24 --width 640 --height 360 -o out/")]
pub struct Args {
    /// Width of the video in pixels (must be even)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Height of the video in pixels (must be even)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Raw rgb24 input file, stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for encoded.yuv, the bitstream, decoded.yuv and decoded.rgb24
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Compression level (none, fast, default, best)
    #[arg(long, default_value = "best")]
    pub level: CompressionLevel,

    /// Entropy coding backend (deflate, zlib)
    #[arg(long, default_value = "deflate")]
    pub backend: EntropyBackend,

    /// Fail when the input ends in the middle of a frame
    #[arg(long)]
    pub strict: bool,

    /// Only print the report, write no files
    #[arg(long)]
    pub skip_artifacts: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let config = PartialCodecConfig::new()
        .width(args.width)
        .height(args.height)
        .compression_level(args.level)
        .backend(args.backend)
        .build()?;
    let coder = config.entropy_coder();

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut demuxer = RawVideoDemuxer::new(reader, config.resolution);
    let frames = demuxer.collect_frames()?;
    let resolution = demuxer.resolution();
    if args.strict {
        demuxer.ensure_complete()?;
    }
    info!(frames = frames.len(), %resolution, "read input");

    let encoded = encode_video(&frames, resolution, coder.as_ref())?;
    encoded.report.log();
    debug!("\n{}", encoded.report);

    let decoded = decode_video(&encoded.bitstream, resolution, coder.as_ref())?;
    if decoded != encoded.frames {
        bail!("decoded planar frames differ from the encoded ones");
    }
    let rgb = frames_to_rgb24(&decoded);

    if args.skip_artifacts {
        return Ok(());
    }

    let muxer = RawFileMuxer::new(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;
    info!("writing artifacts to {}", muxer.output_dir().display());
    muxer.write_frames(ENCODED_YUV_FILE, &Yuv420p, resolution, &encoded.frames)?;
    muxer.write_bitstream(&format!("encoded.{}", coder.name()), &encoded.bitstream)?;
    muxer.write_frames(DECODED_YUV_FILE, &Yuv420p, resolution, &decoded)?;
    muxer.write_frames(DECODED_RGB_FILE, &Rgb24, resolution, &rgb)?;

    Ok(())
}
