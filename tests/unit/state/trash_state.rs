use super::*;

fn ascii_sprites() -> SpriteOverrides {
    SpriteOverrides::default()
        .space("_")
        .can("[C]")
        .right(">")
        .left("<")
}

fn abc() -> TrashState {
    TrashState::new(&["a", "b", "c"], 1, ascii_sprites()).unwrap()
}

#[test]
fn renders_every_frame_of_abc() {
    let st = abc();
    assert_eq!(st.frame_count(), 3);
    assert_eq!(st.render(Some(FrameIndex(0))).unwrap(), "a>_b_c_[C]");
    assert_eq!(st.render(Some(FrameIndex(1))).unwrap(), "__b>_c_[C]");
    assert_eq!(st.render(Some(FrameIndex(2))).unwrap(), "____c<_[C]");
}

#[test]
fn zero_spacing_concatenates_slots() {
    let st = TrashState::new("ab", 0, ascii_sprites()).unwrap();
    assert_eq!(st.render(None).unwrap(), "a>b[C]");
    assert_eq!(st.render(Some(FrameIndex(1))).unwrap(), "_b<[C]");
}

#[test]
fn default_sprites_render() {
    let st = TrashState::with_defaults("ab", 1).unwrap();
    assert_eq!(st.render(None).unwrap(), "a(> ^_^)> b \u{1F5D1}");
    assert_eq!(st.render(Some(FrameIndex(1))).unwrap(), "  b<(^_^ <) \u{1F5D1}");
}

#[test]
fn explicit_render_does_not_move_the_frame() {
    let mut st = abc();
    st.set_frame(FrameIndex(1)).unwrap();
    let _ = st.render(Some(FrameIndex(2))).unwrap();
    assert_eq!(st.current_frame(), FrameIndex(1));
    assert_eq!(st.render(None).unwrap(), "__b>_c_[C]");
}

#[test]
fn set_frame_bounds() {
    let mut st = abc();
    assert!(st.set_frame(FrameIndex(2)).is_ok());
    let err = st.set_frame(FrameIndex(3)).unwrap_err();
    assert!(matches!(
        err,
        TrashError::IndexOutOfRange {
            index: 3,
            frames: 3
        }
    ));
    assert_eq!(st.current_frame(), FrameIndex(2));
    assert!(matches!(
        st.render(Some(FrameIndex(3))),
        Err(TrashError::IndexOutOfRange { .. })
    ));
}

#[test]
fn current_str_reuses_the_reserved_buffer() {
    let mut st = abc();
    let cap = st.buf.capacity();
    assert!(cap >= st.max_frame_len());
    for f in 0..3 {
        st.set_frame(FrameIndex(f)).unwrap();
        let expected = st.render(None).unwrap();
        assert_eq!(st.current_str(), expected);
        assert_eq!(st.buf.capacity(), cap);
    }
}

#[test]
fn slots_expose_pieces_in_order() {
    let st = abc();
    assert_eq!(
        st.slots(Some(FrameIndex(0))).unwrap(),
        vec!["a", ">", "_", "b", "_", "c", "_", "[C]"]
    );
    let joined: String = st.slots(Some(FrameIndex(2))).unwrap().concat();
    assert_eq!(joined, st.render(Some(FrameIndex(2))).unwrap());
}

#[test]
fn write_frame_reports_bytes() {
    let st = TrashState::with_defaults("ñ", 0).unwrap();
    let mut out = Vec::new();
    let n = st.write_frame(None, &mut out).unwrap();
    assert_eq!(n, out.len());
    assert_eq!(String::from_utf8(out).unwrap(), st.render(None).unwrap());
}

#[test]
fn display_matches_current_frame() {
    let mut st = abc();
    st.set_frame(FrameIndex(1)).unwrap();
    assert_eq!(st.to_string(), "__b>_c_[C]");
}

#[test]
fn frames_iterates_in_order() {
    let st = abc();
    let frames: Vec<String> = st.frames().collect();
    assert_eq!(frames, vec!["a>_b_c_[C]", "__b>_c_[C]", "____c<_[C]"]);
}

#[test]
fn buffer_size_counts_the_terminator() {
    let st = abc();
    assert_eq!(st.buffer_size(), st.max_frame_len() + 1);
}

#[test]
fn construction_is_all_or_nothing() {
    assert!(matches!(
        TrashState::new("", 1, ascii_sprites()),
        Err(TrashError::InvalidInput(_))
    ));
    assert!(matches!(
        TrashState::new("abc", 1, SpriteOverrides::default().can("")),
        Err(TrashError::InvalidInput(_))
    ));
}

#[test]
fn huge_spacing_is_rejected_before_allocating() {
    let err = TrashState::new("ab", u32::MAX, SpriteOverrides::default()).unwrap_err();
    assert!(matches!(err, TrashError::InvalidInput(_)));
    assert!(err.to_string().contains("spacing"));

    let st = TrashState::new("ab", crate::sprites::set::MAX_SPACING, ascii_sprites()).unwrap();
    assert_eq!(st.sprites().separator().len(), 1024);
}

#[test]
fn empty_item_renders_as_nothing() {
    let mut st = TrashState::new(&["a", "", "c"], 1, ascii_sprites()).unwrap();
    assert_eq!(st.frame_count(), 3);
    let frames: Vec<String> = st.frames().collect();
    assert_eq!(frames, vec!["a>__c_[C]", "__>_c_[C]", "____c<_[C]"]);
    assert!(frames.iter().all(|f| f.len() <= st.max_frame_len()));

    st.set_frame(FrameIndex(1)).unwrap();
    assert_eq!(st.current_str(), "__>_c_[C]");
}

#[test]
fn signed_frame_errors_carry_the_frame_count() {
    let mut st = abc();
    let err = st.set_frame_i64(-1).unwrap_err();
    assert!(matches!(
        err,
        TrashError::IndexOutOfRange {
            index: -1,
            frames: 3
        }
    ));
    assert!(matches!(
        st.set_frame_i64(3),
        Err(TrashError::IndexOutOfRange {
            index: 3,
            frames: 3
        })
    ));
    assert_eq!(st.current_frame(), FrameIndex(0));

    st.set_frame_i64(2).unwrap();
    assert_eq!(st.current_frame(), FrameIndex(2));
}
