//! Defines the inner representation 
//! of the decision tree classifier.
use serde::{Serialize, Deserialize};

use super::split_rule::{LeftRight, Splitter};

use std::fmt;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node<L, F, FV> {
    /// A node that have two childrens.
    Branch(BranchNode<L, F, FV>),

    /// A node that have no child.
    Leaf(LeafNode<L>),
}


/// Represents the branch nodes of decision tree.
/// The left child covers the instances whose feature value is
/// at most the threshold, the right child covers the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode<L, F, FV> {
    rule: Splitter<F, FV>,
    left: Box<Node<L, F, FV>>,
    right: Box<Node<L, F, FV>>,
}


impl<L, F, FV> BranchNode<L, F, FV> {
    /// Returns the splitting rule of this node.
    #[inline]
    pub fn rule(&self) -> &Splitter<F, FV> {
        &self.rule
    }


    /// Returns the subtree for `feature value <= threshold`.
    #[inline]
    pub fn left(&self) -> &Node<L, F, FV> {
        &self.left
    }


    /// Returns the subtree for `feature value > threshold`.
    #[inline]
    pub fn right(&self) -> &Node<L, F, FV> {
        &self.right
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode<L> {
    label: L,
}


impl<L> LeafNode<L> {
    /// Returns the label this leaf predicts.
    #[inline]
    pub fn label(&self) -> &L {
        &self.label
    }
}


impl<L, F, FV> Node<L, F, FV> {
    /// Returns a leaf that predicts `label` for any input.
    #[inline]
    pub fn leaf(label: L) -> Self {
        Node::Leaf(LeafNode { label })
    }


    /// Returns a branch that routes by `rule` to `left` or `right`.
    #[inline]
    pub fn branch(rule: Splitter<F, FV>, left: Self, right: Self) -> Self {
        let left = Box::new(left);
        let right = Box::new(right);
        Node::Branch(BranchNode { rule, left, right })
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// Returns the number of branch nodes on the longest path
    /// from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
        }
    }


    /// Returns the number of leaves under this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(b) => b.left.n_leaves() + b.right.n_leaves(),
        }
    }


    /// Routes `value` down to a leaf and returns its label.
    pub(super) fn route<V, G>(&self, value: &V, get_feature_value: G) -> &L
        where G: Fn(&V, &F) -> FV,
              FV: Ord,
    {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => { return &leaf.label; },
                Node::Branch(b) => {
                    node = match b.rule.split(value, &get_feature_value) {
                        LeftRight::Left => b.left.as_ref(),
                        LeftRight::Right => b.right.as_ref(),
                    };
                },
            }
        }
    }
}


impl<L, F, FV> Node<L, F, FV>
    where L: fmt::Display,
          F: fmt::Display,
          FV: fmt::Display,
{
    /// Returns the `dot` statements of the subtree rooted at this node,
    /// numbering nodes from `id`, and the next unused id.
    /// The right edge shows `successor(threshold)`,
    /// the smallest value routed right.
    pub(super) fn to_dot_info<S>(&self, id: usize, successor: &S)
        -> (Vec<String>, usize)
        where S: Fn(&FV) -> FV + ?Sized,
    {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{feat} <= {thr} ?\" ];\n",
                    feat = b.rule.feature(),
                    thr = b.rule.threshold(),
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1, successor);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id, successor);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \">= {succ}\" ];\n",
                    r_id = next_id,
                    succ = successor(b.rule.threshold()),
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{label}\", \
                     shape = box, \
                     ];\n",
                    label = l.label
                );

                (vec![info], id + 1)
            }
        }
    }
}
