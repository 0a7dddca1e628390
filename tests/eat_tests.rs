// Integration tests for the eat capability and its delegation orderings

use menagerie::animal::dog::Dog;
use menagerie::animal::person::Person;
use menagerie::animal::{mammal_eats, Mammal};
use menagerie::terminal::MockTerminal;

#[test]
fn test_dog_emits_own_line_then_base_line() {
    let mizu = Dog::new("Mizu", 5);
    let mut terminal = MockTerminal::new();

    mizu.eat(&mut terminal);

    assert_eq!(
        terminal.output(),
        ["Wof wof...", "¡El mamífero está comiendo!"]
    );
}

#[test]
fn test_person_emits_base_line_then_own_line() {
    let jose = Person::new("Software Engineer", 23);
    let mut terminal = MockTerminal::new();

    jose.eat(&mut terminal);

    assert_eq!(
        terminal.output(),
        [
            "¡El mamífero está comiendo!",
            "Hey, soy humano y estoy comiendo..."
        ]
    );
}

#[test]
fn test_base_line_is_identical_across_variants() {
    let mut dog_terminal = MockTerminal::new();
    let mut person_terminal = MockTerminal::new();
    let mut base_terminal = MockTerminal::new();

    Dog::new("Mizu", 5).eat(&mut dog_terminal);
    Person::new("Software Engineer", 23).eat(&mut person_terminal);
    mammal_eats(&mut base_terminal);

    // Dog delegates last, person delegates first
    assert_eq!(dog_terminal.output()[1], base_terminal.output()[0]);
    assert_eq!(person_terminal.output()[0], base_terminal.output()[0]);
}

#[test]
fn test_eat_is_idempotent() {
    let mizu = Dog::new("Mizu", 5);
    let mut terminal = MockTerminal::new();

    mizu.eat(&mut terminal);
    mizu.eat(&mut terminal);

    assert_eq!(
        terminal.output(),
        [
            "Wof wof...",
            "¡El mamífero está comiendo!",
            "Wof wof...",
            "¡El mamífero está comiendo!"
        ]
    );
}

#[test]
fn test_default_eat_is_the_base_behavior() {
    struct Sloth;

    impl Mammal for Sloth {
        fn age(&self) -> u32 {
            3
        }
        // No eat override: the trait default applies
    }

    let mut terminal = MockTerminal::new();
    Sloth.eat(&mut terminal);

    assert_eq!(terminal.output(), ["¡El mamífero está comiendo!"]);
}

#[test]
fn test_dispatch_through_trait_object() {
    let animals: Vec<Box<dyn Mammal>> = vec![
        Box::new(Dog::new("Mizu", 5)),
        Box::new(Person::new("Software Engineer", 23)),
    ];

    let mut terminal = MockTerminal::new();
    for animal in &animals {
        animal.eat(&mut terminal);
    }

    assert_eq!(
        terminal.output(),
        [
            "Wof wof...",
            "¡El mamífero está comiendo!",
            "¡El mamífero está comiendo!",
            "Hey, soy humano y estoy comiendo..."
        ]
    );
}

#[test]
fn test_construction_values_are_preserved() {
    let mizu = Dog::new("Mizu", 5);
    let jose = Person::new("Software Engineer", 23);

    assert_eq!(mizu.name(), "Mizu");
    assert_eq!(mizu.age(), 5);
    assert_eq!(jose.occupation(), "Software Engineer");
    assert_eq!(jose.age(), 23);
}
