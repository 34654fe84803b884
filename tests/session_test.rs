//! Integration tests for builder sessions.

use resumekit::session::{DragPayload, NEW_LIST_ITEM};
use resumekit::{
    BuilderSession, Column, DropPosition, ElementId, ElementType, ParseOptions, RenderOptions,
    SessionState, TemplateType,
};

fn order(session: &BuilderSession) -> Vec<ElementType> {
    session
        .elements()
        .iter()
        .map(|e| e.element_type.clone())
        .collect()
}

#[test]
fn test_build_from_palette() {
    let mut session = BuilderSession::new("Modern", TemplateType::TwoColumn);
    assert_eq!(session.state(), SessionState::Empty);

    let header = session.insert_from_palette(ElementType::Header);
    let experience = session.insert_from_palette(ElementType::Experience);
    let skills = session
        .insert_at(ElementType::Skills, &experience, DropPosition::Before)
        .unwrap();

    assert_eq!(
        order(&session),
        [ElementType::Header, ElementType::Skills, ElementType::Experience]
    );
    assert_eq!(session.template().get(&skills).unwrap().column, Column::Left);
    assert_eq!(session.template().get(&header).unwrap().column, Column::Left);
    assert_eq!(session.template().get(&experience).unwrap().column, Column::Right);
}

#[test]
fn test_drag_existing_element_sequence() {
    let mut session = BuilderSession::new("Drag", TemplateType::Single);
    let a = session.insert_from_palette(ElementType::Summary);
    let b = session.insert_from_palette(ElementType::Skills);
    let c = session.insert_from_palette(ElementType::Awards);

    assert!(session.drag_start_element(&a));
    session.drag_over(Some(b.clone()));
    session.drag_over(Some(c.clone()));
    let placed = session.drop_on(Some((c.clone(), DropPosition::After)));
    assert_eq!(placed, Some(a.clone()));

    let ids: Vec<&ElementId> = session.elements().iter().map(|e| &e.id).collect();
    assert_eq!(ids, [&b, &c, &a]);
}

#[test]
fn test_drop_position_from_pointer_drives_reorder() {
    let mut session = BuilderSession::new("Drag", TemplateType::Single);
    let a = session.insert_from_palette(ElementType::Summary);
    let b = session.insert_from_palette(ElementType::Skills);

    // Target box spans 200..260; pointer in the upper half.
    let position = DropPosition::from_pointer(215.0, 200.0, 60.0);
    assert!(session.move_element(&b, &a, position));
    assert_eq!(order(&session), [ElementType::Skills, ElementType::Summary]);
}

#[test]
fn test_palette_payload_with_existing_id_moves() {
    let mut session = BuilderSession::new("Drag", TemplateType::Single);
    let a = session.insert_from_palette(ElementType::Summary);
    let b = session.insert_from_palette(ElementType::Skills);

    let copy = session.template().get(&a).unwrap().clone();
    let placed = session.reorder(DragPayload::Palette(copy), &b, DropPosition::After);
    assert_eq!(placed, Some(a));
    assert_eq!(session.elements().len(), 2);
    assert_eq!(order(&session), [ElementType::Skills, ElementType::Summary]);
}

#[test]
fn test_drop_on_missing_target_is_noop() {
    let mut session = BuilderSession::new("Drag", TemplateType::Single);
    session.insert_from_palette(ElementType::Summary);
    let before = session.template().clone();

    session.drag_start_palette(ElementType::Awards);
    assert!(session
        .drop_on(Some(("gone".into(), DropPosition::Before)))
        .is_none());
    assert_eq!(session.template(), &before);
    assert!(!session.drag().is_dragging());
}

#[test]
fn test_property_panel_flow() {
    let mut session = BuilderSession::new("Panel", TemplateType::Single);
    let id = session.insert_from_palette(ElementType::Certifications);
    session.select_element(&id);

    let count = session.selected_element().unwrap().list_items.len();
    assert!(session.add_list_item(&id));
    assert_eq!(
        session.selected_element().unwrap().list_items.last().map(String::as_str),
        Some(NEW_LIST_ITEM)
    );
    assert!(session.update_list_item(&id, count, "AWS Solutions Architect, 2024"));
    assert!(session.set_style_property(&id, "color", "#222"));

    let html = session.generate_html(&RenderOptions::default());
    assert!(html.contains("<li>AWS Solutions Architect, 2024</li>"));
    assert!(html.contains("color: #222;"));

    session.remove_element(&id);
    assert_eq!(session.state(), SessionState::Empty);
}

#[test]
fn test_session_from_html() {
    let html = r#"<div class="resume-container"><div class="summary"><p>Hi</p></div></div>"#;
    let session = BuilderSession::from_html("Imported", html, &ParseOptions::default()).unwrap();
    assert_eq!(session.name(), "Imported");
    assert_eq!(session.template_type(), TemplateType::Single);
    assert_eq!(session.elements()[0].content, "Hi");
    assert!(session.record_id().is_none());
}

#[test]
fn test_validate_requires_name() {
    let mut session = BuilderSession::new("", TemplateType::Single);
    assert!(session.validate().is_err());
    session.rename("Named");
    assert!(session.validate().is_ok());
}
