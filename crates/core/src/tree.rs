//! Adjacency-list-to-tree materialization.
//!
//! The category table is a flat self-referencing adjacency list. The admin
//! API returns it as a nested tree. [`build_tree`] is the single place that
//! grouping happens, with a defined contract:
//!
//! - Rows with no parent become roots, in input order.
//! - Children are attached recursively, in input order within each sibling
//!   group (callers order the flat result, e.g. by name).
//! - A row whose parent is not present in the input is dropped. With the
//!   `ON DELETE CASCADE` schema this cannot happen for categories; the
//!   contract exists so the function stays total on arbitrary input.
//!
//! The application only ever creates two levels (category + subcategory),
//! but materialization is recursive so deeper nesting would serialize
//! correctly without changes here.

use std::collections::HashMap;

use crate::types::DbId;

/// A row that participates in a self-referencing hierarchy.
pub trait AdjacencyRow {
    fn id(&self) -> DbId;
    fn parent_id(&self) -> Option<DbId>;
}

/// A materialized tree node wrapping one flat row.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub row: T,
    pub children: Vec<TreeNode<T>>,
}

/// Materialize a flat adjacency list into a forest of [`TreeNode`]s.
pub fn build_tree<T: AdjacencyRow>(rows: Vec<T>) -> Vec<TreeNode<T>> {
    let mut by_parent: HashMap<Option<DbId>, Vec<T>> = HashMap::new();
    let known: std::collections::HashSet<DbId> = rows.iter().map(AdjacencyRow::id).collect();

    for row in rows {
        // Rows pointing at an id outside the input have no attachment
        // point; drop them rather than promoting them to roots.
        if let Some(parent) = row.parent_id() {
            if !known.contains(&parent) {
                continue;
            }
        }
        by_parent.entry(row.parent_id()).or_default().push(row);
    }

    attach(None, &mut by_parent)
}

fn attach<T: AdjacencyRow>(
    parent: Option<DbId>,
    by_parent: &mut HashMap<Option<DbId>, Vec<T>>,
) -> Vec<TreeNode<T>> {
    let rows = by_parent.remove(&parent).unwrap_or_default();
    rows.into_iter()
        .map(|row| {
            let children = attach(Some(row.id()), by_parent);
            TreeNode { row, children }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: DbId,
        parent: Option<DbId>,
    }

    impl AdjacencyRow for Row {
        fn id(&self) -> DbId {
            self.id
        }
        fn parent_id(&self) -> Option<DbId> {
            self.parent
        }
    }

    fn row(id: DbId, parent: Option<DbId>) -> Row {
        Row { id, parent }
    }

    #[test]
    fn roots_keep_input_order() {
        let tree = build_tree(vec![row(3, None), row(1, None), row(2, None)]);
        let ids: Vec<DbId> = tree.iter().map(|n| n.row.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(tree.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn children_nest_under_their_parent() {
        let tree = build_tree(vec![row(1, None), row(2, Some(1)), row(3, Some(1))]);
        assert_eq!(tree.len(), 1);
        let children: Vec<DbId> = tree[0].children.iter().map(|n| n.row.id).collect();
        assert_eq!(children, vec![2, 3]);
    }

    #[test]
    fn nesting_is_recursive() {
        let tree = build_tree(vec![row(1, None), row(2, Some(1)), row(3, Some(2))]);
        assert_eq!(tree[0].children[0].children[0].row.id, 3);
    }

    #[test]
    fn orphan_rows_are_dropped() {
        let tree = build_tree(vec![row(1, None), row(2, Some(99))]);
        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_forest() {
        let tree = build_tree(Vec::<Row>::new());
        assert!(tree.is_empty());
    }
}
