//! Merge Two Sorted Lists (LeetCode 21).

/// One element of a singly-linked list. `Option<Box<ListNode>>` is the whole
/// list: `None` is the empty list, `Some` owns the head. Ownership of `next`
/// makes cycles unrepresentable, so every list is finite by construction.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    #[inline]
    pub fn new(val: i32) -> Self {
        ListNode { next: None, val }
    }
}

/// Merges two lists, each sorted in non-decreasing order, into one sorted
/// list by splicing the existing nodes together. No node is allocated or
/// copied; the inputs' nodes are relinked into the result.
///
/// Ties favor `list1`: when both heads hold equal values, `list1`'s node is
/// placed first. Relative order of equal values within one input is kept.
///
/// Precondition (not checked): both inputs are sorted non-decreasing.
pub fn merge_two_lists(
    mut list1: Option<Box<ListNode>>,
    mut list2: Option<Box<ListNode>>,
) -> Option<Box<ListNode>> {
    let mut merged = None;
    // Tail cursor into the growing result; stands in for a dummy head node.
    let mut tail = &mut merged;

    while let (Some(n1), Some(n2)) = (list1.as_ref(), list2.as_ref()) {
        let source = if n1.val <= n2.val { &mut list1 } else { &mut list2 };
        let mut node = source.take();
        *source = node.as_mut().unwrap().next.take();
        *tail = node;
        tail = &mut tail.as_mut().unwrap().next;
    }

    // One of the two is empty; attach the remainder of the other as-is.
    *tail = if list1.is_some() { list1 } else { list2 };

    merged
}

/// Builds a list from a slice, preserving order.
pub fn from_slice(items: &[i32]) -> Option<Box<ListNode>> {
    let mut head = None;
    let mut current = &mut head;

    for &item in items {
        *current = Some(Box::new(ListNode::new(item)));
        current = &mut current.as_mut().unwrap().next;
    }

    head
}

/// Flattens a list back into a `Vec`, front to back.
pub fn to_vec(mut list: &Option<Box<ListNode>>) -> Vec<i32> {
    let mut items = Vec::new();
    while let Some(node) = list {
        items.push(node.val);
        list = &node.next;
    }
    items
}
