use super::*;

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut queue = ToastQueue::default();
    let first = queue.push(ToastKind::Success, "Saved".to_string());
    let second = queue.push(ToastKind::Error, "Failed".to_string());

    assert!(second > first);
    let messages: Vec<&str> = queue.items().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["Saved", "Failed"]);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut queue = ToastQueue::default();
    let first = queue.push(ToastKind::Success, "one".to_string());
    let second = queue.push(ToastKind::Success, "two".to_string());

    queue.dismiss(first);
    assert_eq!(queue.items().len(), 1);
    assert_eq!(queue.items()[0].id, second);

    queue.dismiss(first);
    assert_eq!(queue.items().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut queue = ToastQueue::default();
    let first = queue.push(ToastKind::Error, "a".to_string());
    queue.dismiss(first);
    let second = queue.push(ToastKind::Error, "b".to_string());
    assert_ne!(first, second);
}
