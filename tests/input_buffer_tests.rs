use proptest::prelude::*;

use snake_loop::input::InputBuffer;

#[test]
fn full_ring_drops_only_the_oldest() {
    let mut buf = InputBuffer::new(10);
    for ch in "abcdefghijk".chars() {
        buf.push(Some(ch));
    }
    assert_eq!(buf.len(), 11);
    assert_eq!(buf.capacity(), 11);

    assert_eq!(buf.push(Some('z')), Some('a'));
    assert_eq!(buf.len(), 11);
    assert_eq!(buf.as_slice().first(), Some(&'b'));
    assert_eq!(buf.as_slice().last(), Some(&'z'));
}

proptest! {
    #[test]
    fn prop_ring_never_exceeds_capacity(
        limit in 0usize..20,
        keys in prop::collection::vec(prop::option::of(prop::char::range('a', 'z')), 0..100),
    ) {
        let mut buf = InputBuffer::new(limit);
        for key in keys {
            let before = buf.as_slice().to_vec();
            let evicted = buf.push(key);

            prop_assert!(buf.len() <= buf.capacity());
            if before.len() == buf.capacity() && key.is_some() {
                prop_assert_eq!(evicted, Some(before[0]));
                prop_assert_eq!(buf.len(), buf.capacity());
                prop_assert_eq!(&buf.as_slice()[..buf.len() - 1], &before[1..]);
            }
        }
    }
}
