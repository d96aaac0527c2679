//! The WeSplit form: a tap counter, a bound name field, a hundred rows and a
//! student picker

use std::fmt;
use wesplit_ui::core::{Binding, BoxedWidget, Invalidator, State, TitleDisplayMode, View};
use wesplit_ui::widgets::{Button, ForEach, Form, NavigationStack, Picker, Section, Text, TextField};

pub const TITLE: &str = "SwiftUI";
pub const NAME_PLACEHOLDER: &str = "Enter your name";
pub const PICKER_LABEL: &str = "Select your student";
pub const ROW_COUNT: usize = 100;

/// A student that can be picked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Student {
    #[default]
    Harry,
    Hermione,
    Ron,
}

/// Every selectable student, in display order
pub const ROSTER: [Student; 3] = [Student::Harry, Student::Hermione, Student::Ron];

impl Student {
    pub fn name(self) -> &'static str {
        match self {
            Student::Harry => "Harry",
            Student::Hermione => "Hermione",
            Student::Ron => "Ron",
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Label of the row at `index`
pub fn row_label(index: usize) -> String {
    format!("Row {index}")
}

/// State for one form
///
/// Clones are handles to the same cells; widget callbacks hold one.
#[derive(Debug, Clone, Default)]
pub struct ContentView {
    tap_count: State<u64>,
    entered_name: State<String>,
    selected_student: State<Student>,
}

impl ContentView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate_counter(&self) {
        self.tap_count.update(|n| *n = n.saturating_add(1));
        tracing::debug!(tap_count = self.tap_count.get(), "counter activated");
    }

    /// Replace the entered name with the field's full contents
    pub fn edit_name(&self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        tracing::debug!(len = new_text.chars().count(), "name edited");
        self.entered_name.set(new_text);
    }

    pub fn select_student(&self, choice: Student) {
        tracing::debug!(student = %choice, "student selected");
        self.selected_student.set(choice);
    }

    /// Labels for the fixed rows; independent of any state
    pub fn render_rows(&self) -> Vec<String> {
        (0..ROW_COUNT).map(row_label).collect()
    }

    pub fn tap_count(&self) -> u64 {
        self.tap_count.get()
    }

    pub fn entered_name(&self) -> String {
        self.entered_name.get()
    }

    pub fn selected_student(&self) -> Student {
        self.selected_student.get()
    }

    pub fn roster(&self) -> &'static [Student] {
        &ROSTER
    }

    pub fn counter_label(&self) -> String {
        format!("Tap Count: {}", self.tap_count())
    }

    pub fn name_label(&self) -> String {
        self.entered_name.with(|name| format!("Your name is {name}"))
    }

    fn name_binding(&self) -> Binding<String> {
        let reader = self.clone();
        let writer = self.clone();
        Binding::new(move || reader.entered_name(), move |text| writer.edit_name(text))
    }

    fn student_binding(&self) -> Binding<Student> {
        let reader = self.clone();
        let writer = self.clone();
        Binding::new(move || reader.selected_student(), move |choice| writer.select_student(choice))
    }
}

impl View for ContentView {
    fn body(&self) -> BoxedWidget {
        let counter = self.clone();

        let form = Form::new()
            .child(TextField::new(NAME_PLACEHOLDER, self.name_binding()))
            .child(Text::new(self.name_label()))
            .child(ForEach::new(
                self.render_rows().into_iter().enumerate(),
                |(index, _): &(usize, String)| *index,
                |(_, label): &(usize, String)| Text::new(label.clone()),
            ));

        let students = self.roster().iter().copied();
        let picker = Picker::new(PICKER_LABEL, self.student_binding(), students, |s: &Student| {
            s.name().to_string()
        });

        Box::new(
            NavigationStack::new(TITLE)
                .display_mode(TitleDisplayMode::Inline)
                .child(Button::new(self.counter_label()).on_click(move || counter.activate_counter()))
                .child(form)
                .child(Section::new().child(Form::new().child(picker))),
        )
    }

    fn observe(&self, invalidator: &Invalidator) {
        invalidator.watch(&self.tap_count);
        invalidator.watch(&self.entered_name);
        invalidator.watch(&self.selected_student);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wesplit_ui::core::{Event, Key, Modifiers, Node};
    use wesplit_ui::Runtime;

    const WIDTH: f32 = 390.0;
    const HEIGHT: f32 = 844.0;

    fn runtime() -> Runtime<ContentView> {
        Runtime::new(ContentView::new(), WIDTH, HEIGHT).unwrap()
    }

    fn tap_text(rt: &mut Runtime<ContentView>, text: &str) {
        let p = rt.locate(text).unwrap_or_else(|| panic!("{text:?} is not visible"));
        rt.tap(p).unwrap();
    }

    #[test]
    fn test_fresh_view_defaults() {
        let view = ContentView::new();
        assert_eq!(view.tap_count(), 0);
        assert_eq!(view.entered_name(), "");
        assert_eq!(view.selected_student(), Student::Harry);
        assert_eq!(view.counter_label(), "Tap Count: 0");
        assert_eq!(view.name_label(), "Your name is ");
    }

    #[test]
    fn test_counter_counts_activations() {
        let view = ContentView::new();
        for n in 1..=3 {
            view.activate_counter();
            assert_eq!(view.tap_count(), n);
        }
        assert_eq!(view.counter_label(), "Tap Count: 3");
    }

    #[test]
    fn test_counter_saturates() {
        let view = ContentView::new();
        view.tap_count.set(u64::MAX);
        view.activate_counter();
        assert_eq!(view.tap_count(), u64::MAX);
    }

    #[test]
    fn test_last_edit_wins() {
        let view = ContentView::new();
        for text in ["L", "Lu", "Lun", "Luna"] {
            view.edit_name(text);
        }
        assert_eq!(view.entered_name(), "Luna");
        assert_eq!(view.name_label(), "Your name is Luna");

        view.edit_name("");
        assert_eq!(view.name_label(), "Your name is ");
    }

    #[test]
    fn test_selection_stays_on_roster() {
        let view = ContentView::new();
        view.select_student(Student::Ron);
        assert_eq!(view.selected_student(), Student::Ron);
        assert!(view.roster().contains(&view.selected_student()));
        assert_eq!(
            view.roster().iter().map(|s| s.name()).collect::<Vec<_>>(),
            ["Harry", "Hermione", "Ron"]
        );
    }

    #[test]
    fn test_student_display_is_its_name() {
        for student in ROSTER {
            assert_eq!(student.to_string(), student.name());
        }
    }

    #[test]
    fn test_rows_ignore_other_state() {
        let view = ContentView::new();
        let fresh = view.render_rows();
        view.activate_counter();
        view.edit_name("Luna");
        view.select_student(Student::Hermione);

        let rows = view.render_rows();
        assert_eq!(rows, fresh);
        assert_eq!(rows.len(), 100);
        assert_eq!(rows[0], "Row 0");
        assert_eq!(rows[99], "Row 99");
    }

    #[test]
    fn test_body_describes_the_form() {
        let view = ContentView::new();
        view.edit_name("Luna");
        let tree = view.body().describe();

        match &tree {
            Node::NavigationStack { title, display_mode, children } => {
                assert_eq!(title, TITLE);
                assert_eq!(*display_mode, TitleDisplayMode::Inline);
                assert_eq!(children.len(), 3);
            }
            other => panic!("unexpected root {other:?}"),
        }

        let texts = tree.texts();
        assert!(texts.contains(&"Tap Count: 0".to_string()));
        assert!(texts.contains(&"Luna".to_string()));
        assert!(texts.contains(&"Your name is Luna".to_string()));

        let rows: Vec<&String> = texts.iter().filter(|t| t.starts_with("Row ")).collect();
        assert_eq!(rows.len(), 100);
        assert_eq!(rows.first().map(|s| s.as_str()), Some("Row 0"));
        assert_eq!(rows.last().map(|s| s.as_str()), Some("Row 99"));

        let picker = tree.find(&|n| matches!(n, Node::Picker { .. }));
        assert_eq!(
            picker,
            Some(&Node::Picker {
                label: PICKER_LABEL.into(),
                selection: "Harry".into(),
                options: vec!["Harry".into(), "Hermione".into(), "Ron".into()],
            })
        );
    }

    #[test]
    fn test_body_rows_come_from_render_rows() {
        let view = ContentView::new();
        let tree = view.body().describe();
        let rows = tree
            .find(&|n| matches!(n, Node::ForEach { .. }))
            .expect("body has a row list");

        assert_eq!(rows.texts(), view.render_rows());
        match rows {
            Node::ForEach { keys, .. } => {
                assert_eq!(keys.first().map(String::as_str), Some("0"));
                assert_eq!(keys.last().map(String::as_str), Some("99"));
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_outline_and_json() {
        let tree = ContentView::new().body().describe();
        let outline = tree.outline();
        assert!(outline.starts_with("NavigationStack \"SwiftUI\" (Inline)\n"));
        assert!(outline.contains("  [Tap Count: 0]\n"));
        assert!(outline.contains("<Enter your name>"));
        assert!(outline.contains("ForEach (100 items)"));
        assert!(outline.contains("(*) Harry"));
        assert!(outline.contains("( ) Ron"));

        let json = tree.to_json().unwrap();
        assert!(json.contains("\"kind\": \"navigation_stack\""));
        assert!(json.contains("\"display_mode\": \"inline\""));
    }

    #[test]
    fn test_tapping_the_button_three_times() {
        let mut rt = runtime();
        for n in 0..3 {
            tap_text(&mut rt, &format!("Tap Count: {n}"));
        }
        assert_eq!(rt.view().tap_count(), 3);
        assert!(rt.locate("Tap Count: 3").is_some());
    }

    #[test]
    fn test_typing_into_the_field_updates_the_label() {
        let mut rt = runtime();
        tap_text(&mut rt, NAME_PLACEHOLDER);
        for ch in ["L", "u", "n", "a"] {
            rt.type_text(ch).unwrap();
        }
        assert_eq!(rt.view().entered_name(), "Luna");
        assert!(rt.locate("Your name is Luna").is_some());

        rt.dispatch(Event::KeyDown { key: Key::Backspace, modifiers: Modifiers::default() })
            .unwrap();
        assert!(rt.locate("Your name is Lun").is_some());
    }

    #[test]
    fn test_picking_ron() {
        let mut rt = runtime();
        tap_text(&mut rt, "Ron");
        assert_eq!(rt.view().selected_student(), Student::Ron);

        let tree = rt.describe();
        let picker = tree.find(&|n| matches!(n, Node::Picker { .. }));
        assert!(matches!(picker, Some(Node::Picker { selection, .. }) if selection == "Ron"));
    }

    #[test]
    fn test_counter_keeps_name_focus() {
        let mut rt = runtime();
        tap_text(&mut rt, NAME_PLACEHOLDER);
        rt.type_text("Lu").unwrap();
        let focused = rt.context().focused();

        // Outside state changes rebuild without stealing focus
        rt.view().activate_counter();
        assert!(rt.update().unwrap());
        assert_eq!(rt.context().focused(), focused);

        rt.type_text("na").unwrap();
        assert_eq!(rt.view().entered_name(), "Luna");
    }

    #[test]
    fn test_rows_scroll_into_view() {
        let mut rt = runtime();
        assert!(rt.locate("Row 0").is_some());
        assert!(rt.locate("Row 60").is_none());

        let inside_form = rt.locate("Row 0").unwrap();
        rt.dispatch(Event::MouseMove { x: inside_form.x, y: inside_form.y }).unwrap();
        rt.dispatch(Event::Scroll { delta_x: 0.0, delta_y: -44.0 * 60.0 }).unwrap();

        assert!(rt.locate("Row 60").is_some());
        // The title bar and picker are outside the scrolled form
        assert!(rt.locate("Tap Count: 0").is_some());
        assert!(rt.locate("Hermione").is_some());
    }
}
