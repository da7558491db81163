//! Whole-tree invariant tests.

use super::*;

const SOURCE: &str = r#"
    class Square {
        field int x, y;
        field int size;
        static boolean debug;

        constructor Square new(int ax, int ay, int asize) {
            let x = ax;
            let y = ay;
            let size = asize;
            do draw();
            return this;
        }

        method void draw() {
            do Screen.setColor(true);
            do Screen.drawRectangle(x, y, x + size, y + size);
            return;
        }

        method void moveUp() {
            if (y > 1) {
                do Screen.setColor(false);
                let y = y - 2;
            } else {
                while (debug) {
                    do Output.printString("stuck");
                    let debug = ~debug;
                }
            }
            return;
        }
    }
"#;

#[test]
fn test_every_leaf_parent_is_a_token_node() {
    let tree = parse(SOURCE);
    for id in tree.all_nodes() {
        if !tree.is_leaf(id) {
            continue;
        }
        let parent = match tree.parent(id) {
            Some(parent) => parent,
            // Unattached leaves can only come from failed grammar
            // branches; they are not part of the tree proper.
            None => continue,
        };
        let label = tree.label(parent).expect("leaf parent is interior");
        assert!(
            label.is_token(),
            "Leaf parent should be a token-category node, got {:?}",
            label
        );
    }
}

#[test]
fn test_every_attached_interior_node_is_nonempty() {
    let tree = parse(SOURCE);
    for id in tree.all_nodes() {
        if tree.is_leaf(id) || tree.parent(id).is_none() {
            continue;
        }
        // The only interior nodes that may be childless are the nullable
        // list productions.
        if tree.children(id).is_empty() {
            let label = tree.label(id).unwrap();
            assert!(
                matches!(
                    label,
                    NodeLabel::ParameterList | NodeLabel::ExpressionList | NodeLabel::Statements
                ),
                "Unexpected empty {:?} node",
                label
            );
        }
    }
}

#[test]
fn test_token_nodes_hold_exactly_one_leaf() {
    let tree = parse(SOURCE);
    for id in tree.all_nodes() {
        let Some(label) = tree.label(id) else { continue };
        if label.is_token() && tree.parent(id).is_some() {
            assert_eq!(tree.children(id).len(), 1);
            assert!(tree.is_leaf(tree.children(id)[0]));
        }
    }
}

#[test]
fn test_root_is_class() {
    let tree = parse(SOURCE);
    assert_eq!(tree.label(tree.root()), Some(NodeLabel::Class));
    assert_eq!(tree.parent(tree.root()), None);
}
