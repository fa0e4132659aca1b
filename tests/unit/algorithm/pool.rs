//! Tests for pools of unplaced tiles

#[cfg(test)]
mod tests {
    use puzzlestitch::algorithm::pool::TilePool;
    use puzzlestitch::analysis::classification::Role;

    // Tests a fresh pool offers every member in input order
    // Verified by iterating consumed bits instead of free ones
    #[test]
    fn test_new_pool_offers_all_members() {
        let pool = TilePool::new(Role::GeneralMember, vec![8, 3, 5]);

        assert_eq!(pool.role(), Role::GeneralMember);
        assert_eq!(pool.remaining(), 3);
        assert!(!pool.is_exhausted());
        assert_eq!(pool.available().collect::<Vec<_>>(), vec![(0, 8), (1, 3), (2, 5)]);
    }

    // Tests taking a member removes it without disturbing the others' order
    // Verified by swap-removing taken members
    #[test]
    fn test_take_keeps_order_of_remaining() {
        let mut pool = TilePool::new(Role::LeftColumnMember, vec![4, 9, 2, 7]);

        assert_eq!(pool.take(1), Some(9));
        assert_eq!(pool.leftover(), vec![4, 2, 7]);
        assert_eq!(pool.remaining(), 3);
    }

    // Tests a member can be taken only once and bad slots are refused
    // Verified by skipping the consumed-bit check
    #[test]
    fn test_take_is_single_use() {
        let mut pool = TilePool::new(Role::GeneralMember, vec![1, 2]);

        assert_eq!(pool.take(0), Some(1));
        assert_eq!(pool.take(0), None);
        assert_eq!(pool.take(2), None);
        assert_eq!(pool.take(1), Some(2));
        assert!(pool.is_exhausted());
        assert!(pool.leftover().is_empty());
    }

    // Tests an empty pool is exhausted from the start
    // Verified by reporting exhaustion with any()
    #[test]
    fn test_empty_pool() {
        let pool = TilePool::new(Role::LeftColumnMember, Vec::new());

        assert!(pool.is_exhausted());
        assert_eq!(pool.available().count(), 0);
        assert_eq!(pool.to_string(), "left-column pool: 0/0 remaining");
    }
}
