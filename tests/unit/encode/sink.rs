use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        frames: 2,
        max_frame_len: 16,
    }
}

#[test]
fn in_memory_sink_captures_config_and_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), "a>").unwrap();
    sink.push_frame(FrameIndex(1), "_<").unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg()));
    assert_eq!(
        sink.frames(),
        &[
            (FrameIndex(0), "a>".to_string()),
            (FrameIndex(1), "_<".to_string())
        ]
    );
}

#[test]
fn lines_layout_writes_one_frame_per_line() {
    let mut sink = WriterSink::new(Vec::new(), FrameLayout::Lines);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), "one").unwrap();
    sink.push_frame(FrameIndex(1), "two").unwrap();
    sink.end().unwrap();
    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "one\ntwo\n");
}

#[test]
fn inline_layout_pads_over_wider_frames() {
    let mut sink = WriterSink::new(Vec::new(), FrameLayout::Inline);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), "abcd").unwrap();
    sink.push_frame(FrameIndex(1), "ab").unwrap();
    sink.end().unwrap();
    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        "\rabcd\rab  \n"
    );
}

#[test]
fn inline_padding_uses_display_width() {
    let mut sink = WriterSink::new(Vec::new(), FrameLayout::Inline);
    sink.begin(cfg()).unwrap();
    // U+FF21 FULLWIDTH LATIN CAPITAL LETTER A occupies two columns.
    sink.push_frame(FrameIndex(0), "\u{FF21}\u{FF21}").unwrap();
    sink.push_frame(FrameIndex(1), "x").unwrap();
    sink.end().unwrap();
    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        "\r\u{FF21}\u{FF21}\rx   \n"
    );
}
