use super::*;

#[test]
fn test_from_square() {
    assert_eq!(Bitboard::from_square(0).0, 1); // a1
    assert_eq!(Bitboard::from_square(7).0, 128); // h1
    assert_eq!(Bitboard::from_square(63).0, 1 << 63); // h8
}

#[test]
fn test_popcount() {
    assert_eq!(Bitboard::EMPTY.popcount(), 0);
    assert_eq!(Bitboard::from_square(0).popcount(), 1);
    assert_eq!(Bitboard::FILE_A.popcount(), 8);
    assert_eq!(Bitboard::RANK_1.popcount(), 8);
    assert_eq!(Bitboard::ALL.popcount(), 64);
}

#[test]
fn test_lsb_msb() {
    assert_eq!(Bitboard::EMPTY.lsb(), None);
    assert_eq!(Bitboard::EMPTY.msb(), None);
    let bb = Bitboard(0b1010);
    assert_eq!(bb.lsb(), Some(1));
    assert_eq!(bb.msb(), Some(3));
    assert_eq!(Bitboard::ALL.msb(), Some(63));
}

#[test]
fn test_iterator_ascending() {
    let bb = Bitboard(0b1010);
    let squares: Vec<u8> = bb.collect();
    assert_eq!(squares, vec![1, 3]);

    let edges = Bitboard::from_square(0) | Bitboard::from_square(63);
    let squares: Vec<u8> = edges.collect();
    assert_eq!(squares, vec![0, 63]);
}

#[test]
fn test_set_clear() {
    let mut bb = Bitboard::EMPTY;
    bb.set(28);
    assert!(bb.contains(28));
    bb.clear(28);
    assert!(bb.is_empty());
}
