use std::fs::{self, File};

use gvid::{
    colors::Rgb,
    demuxers::raw_video_demuxer::RawVideoDemuxer,
    encode_video,
    muxers::{raw_file_muxer::RawFileMuxer, Muxer},
    pixel_formats::{Rgb24, Rgb24Frame, Yuv420p},
    stream::FrameStream,
    CodecConfig, CodecError, Resolution,
};

#[test]
fn raw_frames_written_then_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let resolution = Resolution::new(4, 2).unwrap();
    let frames: Vec<_> = [Rgb::new(1, 2, 3), Rgb::new(250, 128, 0)]
        .into_iter()
        .map(|rgb| Rgb24Frame::filled(resolution, rgb))
        .collect();

    let muxer = RawFileMuxer::new(dir.path().join("nested")).unwrap();
    assert_eq!(muxer.output_dir(), dir.path().join("nested"));
    assert!(muxer.output_dir().is_dir());
    let path = muxer
        .write_frames("input.rgb24", &Rgb24, resolution, &frames)
        .unwrap();

    let mut demuxer = RawVideoDemuxer::new(File::open(path).unwrap(), resolution);
    assert_eq!(demuxer.collect_frames().unwrap(), frames);
    assert!(demuxer.ensure_complete().is_ok());
}

#[test]
fn encoded_yuv_is_concatenated_planar_frames() {
    let dir = tempfile::tempdir().unwrap();
    let resolution = Resolution::new(2, 2).unwrap();
    let coder = CodecConfig::default().entropy_coder();
    let frames = vec![
        Rgb24Frame::filled(resolution, Rgb::new(100, 150, 200)),
        Rgb24Frame::filled(resolution, Rgb::new(0, 0, 0)),
    ];
    let encoded = encode_video(&frames, resolution, coder.as_ref()).unwrap();

    let muxer = RawFileMuxer::new(dir.path()).unwrap();
    let yuv = muxer
        .write_frames("encoded.yuv", &Yuv420p, resolution, &encoded.frames)
        .unwrap();
    let bitstream = muxer
        .write_bitstream("encoded.deflate", &encoded.bitstream)
        .unwrap();

    let yuv = fs::read(yuv).unwrap();
    assert_eq!(yuv, [140u8, 140, 140, 140, 151, 98, 0, 0, 0, 0, 128, 128]);
    assert_eq!(fs::read(bitstream).unwrap(), encoded.bitstream);
}

#[test]
fn truncated_input_file_is_observable() {
    let dir = tempfile::tempdir().unwrap();
    let resolution = Resolution::new(2, 2).unwrap();
    let path = dir.path().join("short.rgb24");
    fs::write(&path, vec![0u8; 12 * 3 + 7]).unwrap();

    let mut demuxer = RawVideoDemuxer::new(File::open(&path).unwrap(), resolution);
    let frames = demuxer.collect_frames().unwrap();

    assert_eq!(frames.len(), 3);
    assert!(matches!(
        demuxer.incomplete_frame(),
        Some(CodecError::IncompleteFrame {
            expected: 12,
            available: 7
        })
    ));
}
