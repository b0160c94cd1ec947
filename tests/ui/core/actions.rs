use todolist::ui::core::actions::{Action, Focus};

#[test]
fn test_focus_cycles_between_input_and_list() {
    assert_eq!(Focus::default(), Focus::Input);
    assert_eq!(Focus::Input.next(), Focus::List);
    assert_eq!(Focus::List.next(), Focus::Input);
}

#[test]
fn test_actions_compare_by_payload() {
    assert_eq!(Action::ToggleItem(3), Action::ToggleItem(3));
    assert_ne!(Action::ToggleItem(3), Action::RemoveItem(3));
    assert_ne!(Action::InputChar('a'), Action::InputChar('b'));
}
