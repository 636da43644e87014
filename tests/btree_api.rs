use byte_btree::{BTree, BTreeError, BTreeOptions, BTreeStatsSnapshot, Result};

const SCENARIO_KEYS: [&str; 11] = [
    "10", "20", "40", "50", "60", "70", "80", "30", "35", "05", "15",
];

fn scenario_tree() -> Result<BTree> {
    let mut tree = BTree::new(4)?;
    for key in SCENARIO_KEYS {
        tree.insert(key.as_bytes())?;
    }
    Ok(tree)
}

#[test]
fn rejects_orders_below_two() {
    assert_eq!(BTree::new(0).unwrap_err(), BTreeError::InvalidOrder(0));
    assert_eq!(BTree::new(1).unwrap_err(), BTreeError::InvalidOrder(1));
    assert!(BTree::new(2).is_ok());
}

#[test]
fn search_on_empty_tree() -> Result<()> {
    let tree = BTree::new(4)?;
    assert!(tree.search(b"a").is_none());
    assert!(tree.search(b"").is_none());
    assert_eq!(tree.height(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.visualize(), "");
    Ok(())
}

#[test]
fn search_multiple_keys() -> Result<()> {
    let mut tree = BTree::new(4)?;
    for key in ["a", "j", "m", "z", "t"] {
        tree.insert(key.as_bytes())?;
    }
    for key in ["a", "j", "m", "z", "t"] {
        assert_eq!(tree.search(key.as_bytes()), Some(key.as_bytes()));
    }
    assert!(tree.search(b"b").is_none());
    assert!(tree.search(b"k").is_none());
    assert!(tree.search(b"").is_none());
    Ok(())
}

#[test]
fn insert_errors() -> Result<()> {
    let mut tree = BTree::new(4)?;
    assert_eq!(tree.insert(b""), Err(BTreeError::EmptyKey));
    assert_eq!(tree.node_count(), 0);

    tree.insert(b"k")?;
    assert_eq!(tree.insert(b"k"), Err(BTreeError::DuplicateKey));
    assert_eq!(tree.len(), 1);
    Ok(())
}

#[test]
fn delete_errors() -> Result<()> {
    let mut tree = BTree::new(4)?;
    assert_eq!(tree.delete(b""), Err(BTreeError::EmptyKey));
    assert_eq!(tree.delete(b"x"), Err(BTreeError::EmptyTree));

    tree.insert(b"x")?;
    assert_eq!(tree.delete(b"y"), Err(BTreeError::KeyNotFound));
    tree.delete(b"x")?;
    assert_eq!(tree.delete(b"x"), Err(BTreeError::KeyNotFound));
    Ok(())
}

#[test]
fn scenario_through_public_api() -> Result<()> {
    let mut tree = scenario_tree()?;
    tree.verify()?;
    assert_eq!(tree.height(), 3);

    for key in ["70", "35", "15"] {
        tree.delete(key.as_bytes())?;
        tree.verify()?;
    }
    assert_eq!(tree.to_string(), "(40)\n(10) (60)\n(05) (20,30) (50) (80)\n");

    for key in ["70", "35", "15"] {
        assert!(!tree.contains(key.as_bytes()), "{key} should be gone");
    }
    for key in ["05", "10", "20", "30", "40", "50", "60", "80"] {
        assert!(tree.contains(key.as_bytes()), "{key} should remain");
    }
    Ok(())
}

#[test]
fn keys_iterate_in_byte_order() -> Result<()> {
    let tree = scenario_tree()?;
    let keys: Vec<&[u8]> = tree.keys().collect();
    let mut expected: Vec<&[u8]> = SCENARIO_KEYS.iter().map(|k| k.as_bytes()).collect();
    expected.sort();
    assert_eq!(keys, expected);
    assert_eq!(tree.keys().len(), SCENARIO_KEYS.len());

    let via_into_iter = (&tree).into_iter().count();
    assert_eq!(via_into_iter, SCENARIO_KEYS.len());
    Ok(())
}

#[test]
fn byte_order_is_unsigned_and_prefix_first() -> Result<()> {
    let mut tree = BTree::new(3)?;
    let raw: [&[u8]; 6] = [&[0xff], &[0x01, 0x00], &[0x01], b"ab", b"a", &[0x7f, 0xff]];
    for key in raw {
        tree.insert(key)?;
    }
    let ordered: Vec<&[u8]> = tree.keys().collect();
    let expected: [&[u8]; 6] = [&[0x01], &[0x01, 0x00], b"a", b"ab", &[0x7f, 0xff], &[0xff]];
    assert_eq!(ordered, expected);
    Ok(())
}

#[test]
fn clear_resets_tree() -> Result<()> {
    let mut tree = scenario_tree()?;
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 0);
    assert_eq!(tree.delete(b"10"), Err(BTreeError::EmptyTree));
    tree.verify()?;

    tree.insert(b"10")?;
    assert!(tree.contains(b"10"));
    Ok(())
}

#[test]
fn options_drive_construction() -> Result<()> {
    let options = BTreeOptions::from_toml_str("order = 5\ntrack_stats = false")?;
    let mut tree = BTree::with_options(options)?;
    assert_eq!(tree.order(), 5);
    for i in 0..50u32 {
        tree.insert(&i.to_be_bytes())?;
    }
    tree.verify()?;
    assert!(tree.contains(&7u32.to_be_bytes()));
    assert_eq!(tree.stats().snapshot(), BTreeStatsSnapshot::default());

    let default_tree = BTree::with_options(BTreeOptions::default())?;
    assert_eq!(default_tree.order(), byte_btree::DEFAULT_ORDER);
    Ok(())
}

#[test]
fn stats_count_structural_changes() -> Result<()> {
    let mut tree = scenario_tree()?;
    let stats = tree.stats().snapshot();
    assert_eq!(stats.leaf_splits, 4);
    assert_eq!(stats.internal_splits, 1);
    assert_eq!(stats.root_splits, 2);

    assert!(tree.search(b"35").is_some());
    let after = tree.stats().snapshot();
    assert_eq!(after.internal_searches, stats.internal_searches + 2);
    assert_eq!(after.leaf_searches, stats.leaf_searches + 1);

    tree.delete(b"35")?;
    assert_eq!(tree.stats().leaf_merges(), 1);
    tree.stats().emit_tracing();
    Ok(())
}

#[test]
fn round_trip_restores_key_set() -> Result<()> {
    let mut tree = scenario_tree()?;
    let before: Vec<Vec<u8>> = tree.keys().map(<[u8]>::to_vec).collect();
    tree.insert(b"45")?;
    tree.delete(b"45")?;
    let after: Vec<Vec<u8>> = tree.keys().map(<[u8]>::to_vec).collect();
    assert_eq!(before, after);
    tree.verify()?;
    Ok(())
}
