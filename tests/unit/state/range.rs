use super::*;
use crate::encode::sink::InMemorySink;
use crate::sprites::set::SpriteOverrides;

fn state(text: &str) -> TrashState {
    TrashState::new(
        text,
        1,
        SpriteOverrides::default()
            .space(".")
            .can("[C]")
            .right(">")
            .left("<"),
    )
    .unwrap()
}

#[test]
fn sequential_range_streams_in_order() {
    let st = state("abc");
    let mut sink = InMemorySink::new();
    let stats = st
        .render_range(FrameRange::all(3), RenderOpts::default(), &mut sink)
        .unwrap();

    assert_eq!(stats.frames_total, 3);
    assert_eq!(sink.config().unwrap().frames, 3);
    assert_eq!(sink.config().unwrap().max_frame_len, st.max_frame_len());
    let frames: Vec<&str> = sink.frames().iter().map(|(_, f)| f.as_str()).collect();
    assert_eq!(frames, vec!["a>.b.c.[C]", "..b>.c.[C]", "....c<.[C]"]);
    assert_eq!(
        stats.bytes_total,
        frames.iter().map(|f| f.len() as u64).sum::<u64>()
    );
}

#[test]
fn parallel_and_sequential_match() {
    let st = state("the quick brown fox jumps over the lazy dog");
    let range = FrameRange::all(st.frame_count());

    let mut seq = InMemorySink::new();
    st.render_range(range, RenderOpts::default(), &mut seq)
        .unwrap();

    let opts = RenderOpts {
        parallel: true,
        threads: Some(2),
        chunk_size: 5,
    };
    let mut par = InMemorySink::new();
    st.render_range(range, opts, &mut par).unwrap();

    assert_eq!(seq.frames(), par.frames());
    for (i, (idx, _)) in par.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
    }
}

#[test]
fn sub_range_keeps_absolute_indices() {
    let st = state("abcd");
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(1), FrameIndex(3)).unwrap();
    st.render_range(range, RenderOpts::default(), &mut sink)
        .unwrap();
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![1, 2]);
}

#[test]
fn range_bounds_are_checked() {
    let st = state("ab");
    let mut sink = InMemorySink::new();
    assert!(matches!(
        st.render_range(FrameRange::all(3), RenderOpts::default(), &mut sink),
        Err(TrashError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        st.render_range(FrameRange::all(0), RenderOpts::default(), &mut sink),
        Err(TrashError::InvalidInput(_))
    ));
}

#[test]
fn empty_range_inside_bounds_is_invalid_input() {
    let st = state("abc");
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(1), FrameIndex(1)).unwrap();
    let err = st
        .render_range(range, RenderOpts::default(), &mut sink)
        .unwrap_err();
    assert!(matches!(err, TrashError::InvalidInput(_)));
    assert!(err.to_string().contains("empty frame range [1, 1)"));
    assert!(sink.config().is_none());
    assert!(sink.frames().is_empty());
}

#[test]
fn range_render_leaves_current_frame_alone() {
    let mut st = state("abc");
    st.set_frame(FrameIndex(2)).unwrap();
    let mut sink = InMemorySink::new();
    st.render_range(FrameRange::all(3), RenderOpts::default(), &mut sink)
        .unwrap();
    assert_eq!(st.current_frame(), FrameIndex(2));
}
