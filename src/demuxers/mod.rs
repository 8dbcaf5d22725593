pub mod raw_video_demuxer;
