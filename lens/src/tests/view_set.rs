use super::{alice, city_lens, name_lens, Address, User};
use crate::{set, view};

#[test]
fn test_view_retrieves_focused_value() {
    let user = alice();

    assert_eq!(view(&name_lens(), &user), "Alice");
    assert_eq!(view(&city_lens(), &user), "Wonderland");
}

#[test]
fn test_set_updates_focused_value() {
    let user = alice();
    let renamed = set(&name_lens(), "Gerald".to_string(), &user);

    assert_eq!(
        renamed,
        User {
            name: "Gerald".to_string(),
            address: Address {
                city: "Wonderland".to_string(),
                zip: "12345".to_string(),
            },
        }
    );
    assert_ne!(renamed, user);
}

#[test]
fn test_set_leaves_input_untouched() {
    let user = alice();
    let _moved = set(&city_lens(), "Oz".to_string(), &user);

    assert_eq!(user, alice());
}

#[test]
fn test_view_after_set_returns_new_value() {
    let lens = city_lens();
    let moved = lens.set("Oz".to_string(), &alice());

    assert_eq!(lens.view(&moved), "Oz");
}

#[test]
fn test_set_with_current_value_is_identity() {
    let lens = city_lens();
    let user = alice();

    assert_eq!(lens.set(lens.view(&user), &user), user);
}

#[test]
fn test_second_set_overwrites_first() {
    let lens = name_lens();
    let user = alice();

    let twice = lens.set("Hatter".to_string(), &lens.set("Gerald".to_string(), &user));
    let once = lens.set("Hatter".to_string(), &user);

    assert_eq!(twice, once);
}

#[test]
fn test_set_only_changes_focus() {
    let moved = set(&city_lens(), "Oz".to_string(), &alice());

    assert_eq!(moved.name, "Alice");
    assert_eq!(moved.address.zip, "12345");
    assert_eq!(moved.address.city, "Oz");
}

#[test]
#[should_panic(expected = "no such field")]
fn test_getter_panic_propagates_through_view() {
    let broken = crate::Lens::new(
        |_: &User| -> String { panic!("no such field") },
        |_, user: &User| user.clone(),
    );

    view(&broken, &alice());
}
