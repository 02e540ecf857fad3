//! Integration tests for the tree store and history.

use serde_json::json;
use treeline::{History, NodeId, TreeNode, TreeStore};

fn sample_items() -> Vec<TreeNode> {
    vec![
        TreeNode::new(1, None, "Root"),
        TreeNode::new(2, Some(NodeId::Num(1)), "Child 1"),
        TreeNode::new(3, Some(NodeId::Num(1)), "Child 2"),
        TreeNode::new(4, Some(NodeId::Num(2)), "Grandchild 1"),
    ]
}

fn ids(nodes: &[&TreeNode]) -> Vec<i64> {
    nodes
        .iter()
        .map(|node| match &node.id {
            NodeId::Num(n) => *n,
            NodeId::Text(s) => panic!("expected numeric id, got {s:?}"),
        })
        .collect()
}

// --- Tree Store Scenarios ---

#[test]
fn test_initializes_from_flat_list() {
    let store = TreeStore::new(sample_items());

    assert_eq!(store.items().len(), 4);
    assert_eq!(store.get(&NodeId::Num(2)).unwrap().label, "Child 1");
    assert!(store.get(&NodeId::Num(999)).is_none());
}

#[test]
fn test_traversals_on_four_node_tree() {
    let store = TreeStore::new(sample_items());

    assert_eq!(ids(&store.children(&NodeId::Num(1))), vec![2, 3]);
    assert_eq!(ids(&store.descendants(&NodeId::Num(1))), vec![2, 4, 3]);
    assert_eq!(
        ids(&store.ancestors(&NodeId::Num(4)).unwrap()),
        vec![1, 2]
    );
}

#[test]
fn test_mutation_sequence() {
    let mut store = TreeStore::new(sample_items());

    store
        .insert(TreeNode::new(5, Some(NodeId::Num(2)), "New Child"))
        .unwrap();
    assert_eq!(ids(&store.children(&NodeId::Num(2))), vec![4, 5]);

    store
        .update(TreeNode::new(5, Some(NodeId::Num(2)), "Renamed Child"))
        .unwrap();
    assert_eq!(store.get(&NodeId::Num(5)).unwrap().label, "Renamed Child");

    store.remove(&NodeId::Num(2));
    assert!(store.get(&NodeId::Num(2)).is_none());
    assert!(store.get(&NodeId::Num(4)).is_none());
    assert!(store.get(&NodeId::Num(5)).is_none());
    assert_eq!(ids(&store.children(&NodeId::Num(1))), vec![3]);
}

#[test]
fn test_json_seeded_store_with_payloads() {
    let items: Vec<TreeNode> = serde_json::from_value(json!([
        { "id": "inbox", "parent": null, "label": "Inbox" },
        { "id": "work", "parent": "inbox", "label": "Work",
          "payload": { "unread": 12 } }
    ]))
    .unwrap();
    let store = TreeStore::new(items);

    let work = store.get(&NodeId::from("work")).unwrap();
    assert_eq!(work.payload["unread"], 12);
    assert_eq!(store.roots().len(), 1);
}

// --- History Scenarios ---

#[test]
fn test_undo_redo_cycle() {
    let mut history = History::new();
    history.save(&["a"]);
    history.save(&["a", "b"]);

    assert_eq!(history.undo(), Some(&["a"][..]));
    assert_eq!(history.redo(), Some(&["a", "b"][..]));
    assert!(history.redo().is_none());
}

#[test]
fn test_eviction_keeps_cursor_on_same_snapshot() {
    let mut history = History::with_capacity(3);
    for state in [[1], [2], [3], [4]] {
        history.save(&state);
    }

    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.undo(), Some(&[3][..]));
    assert_eq!(history.undo(), Some(&[2][..]));
    assert!(history.undo().is_none());
}

// --- Combined Workflow ---

#[test]
fn test_snapshot_store_into_history() {
    let mut store = TreeStore::new(sample_items());
    let mut history: History<TreeNode> = History::new();
    history.save(store.items());

    store.remove(&NodeId::Num(2));
    history.save(store.items());
    assert_eq!(store.len(), 2);

    // Undo the removal by restoring the previous snapshot.
    let previous = history.undo().unwrap().to_vec();
    store.set_items(previous);

    assert_eq!(store.len(), 4);
    assert_eq!(ids(&store.descendants(&NodeId::Num(1))), vec![2, 4, 3]);

    // Redo brings back the post-removal state.
    let next = history.redo().unwrap().to_vec();
    store.set_items(next);
    assert_eq!(store.len(), 2);
    assert!(store.get(&NodeId::Num(4)).is_none());
}

#[test]
fn test_saved_snapshots_survive_later_store_mutation() {
    let mut store = TreeStore::new(sample_items());
    let mut history: History<TreeNode> = History::new();
    history.save(store.items());
    history.save(store.items());

    store
        .update(TreeNode::new(2, Some(NodeId::Num(1)), "Mutated"))
        .unwrap();

    let snapshot = history.undo().unwrap();
    let child = snapshot
        .iter()
        .find(|node| node.id == NodeId::Num(2))
        .unwrap();
    assert_eq!(child.label, "Child 1");
}
