mod common;

use common::three_slide_deck;
use slidecoach::deck::{ImageArtifact, SlideId};
use slidecoach::presenter::{NoticeLevel, Presenter};
use slidecoach::ui::notes::NotesPhase;
use std::sync::Arc;

fn presenter() -> Presenter {
    Presenter::new(Arc::new(three_slide_deck()))
}

fn png() -> ImageArtifact {
    ImageArtifact::new("image/png", "iVBORw0KGgo=")
}

// -- images -------------------------------------------------------------------

#[test]
fn test_image_in_flight_then_cached() {
    let mut p = presenter();
    let job = p.request_image().expect("slide 1 has a prompt");
    assert_eq!(job.slide_id, SlideId(1));
    assert_eq!(job.prompt, "A sunrise over circuits");

    assert!(p.image_in_flight());
    assert!(p.is_generating(SlideId(1)));
    assert!(p.current_slide().artifact().is_none());

    p.complete_image(SlideId(1), Ok(Some(png())));
    assert!(!p.image_in_flight());
    assert_eq!(p.current_slide().artifact(), Some(&png()));
    assert_eq!(p.current_slide().artifact(), Some(&png()));
}

#[test]
fn test_cached_image_survives_navigation() {
    let mut p = presenter();
    let job = p.request_image().unwrap();
    p.complete_image(job.slide_id, Ok(Some(png())));

    p.advance();
    p.advance();
    p.retreat();
    p.retreat();
    assert_eq!(p.current_slide().artifact(), Some(&png()));
}

#[test]
fn test_completion_while_viewing_other_slide_does_not_leak() {
    let mut p = presenter();
    let job = p.request_image().unwrap();

    p.advance();
    p.advance();
    assert_eq!(p.current_slide().id, SlideId(3));
    p.complete_image(job.slide_id, Ok(Some(png())));

    assert!(p.current_slide().artifact().is_none());
    assert!(p.cached_image(SlideId(3)).is_none());
    assert_eq!(p.cached_image(SlideId(1)), Some(&png()));

    p.jump_to(0);
    assert_eq!(p.current_slide().artifact(), Some(&png()));
}

#[test]
fn test_empty_image_result_reports_failure_and_keeps_cache_empty() {
    let mut p = presenter();
    let job = p.request_image().unwrap();
    p.complete_image(job.slide_id, Ok(None));

    assert!(!p.image_in_flight());
    assert!(p.cached_image(SlideId(1)).is_none());
    let notice = p.notice().expect("failure notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.starts_with("Failed to generate image"));
}

#[test]
fn test_image_error_reports_message_and_resets_latch() {
    let mut p = presenter();
    let job = p.request_image().unwrap();
    p.complete_image(job.slide_id, Err("API error 500: boom".to_string()));

    assert!(!p.image_in_flight());
    assert!(p.current_slide().artifact().is_none());
    let notice = p.notice().unwrap();
    assert!(notice.is_error());
    assert!(notice.message.contains("boom"));

    // A fresh attempt is allowed after a failure.
    assert!(p.request_image().is_some());
}

#[test]
fn test_image_without_prompt_is_an_info_notice() {
    let mut p = presenter();
    p.advance();
    assert!(p.request_image().is_none());
    assert!(!p.image_in_flight());
    let notice = p.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
}

#[test]
fn test_second_image_request_while_in_flight_is_dropped() {
    let mut p = presenter();
    assert!(p.request_image().is_some());
    p.advance();
    p.advance();
    assert!(p.request_image().is_none());
    assert!(p.is_generating(SlideId(1)));
    assert!(!p.is_generating(SlideId(3)));
}

#[test]
fn test_regenerate_replaces_cached_image() {
    let mut p = presenter();
    let job = p.request_image().unwrap();
    p.complete_image(job.slide_id, Ok(Some(png())));

    let again = p.request_image().expect("regeneration allowed");
    let jpeg = ImageArtifact::new("image/jpeg", "/9j/4AAQ");
    p.complete_image(again.slide_id, Ok(Some(jpeg.clone())));
    assert_eq!(p.current_slide().artifact(), Some(&jpeg));
}

// -- notes --------------------------------------------------------------------

#[test]
fn test_notes_requested_twice_issue_one_request() {
    let mut p = presenter();
    let job = p.request_notes().expect("first request");
    assert_eq!(job.slide.id, SlideId(1));
    assert!(p.notes().open);
    assert!(p.notes().is_loading());

    assert!(p.request_notes().is_none());

    p.complete_notes(SlideId(1), "## Hook".to_string());
    assert!(p.request_notes().is_none());
    assert_eq!(p.notes().text_for(SlideId(1)), Some("## Hook"));
}

#[test]
fn test_notes_are_never_attributed_to_another_slide() {
    let mut p = presenter();
    p.request_notes().unwrap();
    p.complete_notes(SlideId(1), "notes for one".to_string());

    p.advance();
    assert_eq!(p.notes().text_for(p.current_slide().id), None);

    let job = p.request_notes().expect("new slide needs new notes");
    assert_eq!(job.slide.id, SlideId(2));
    assert!(p.notes().is_loading());
    assert_eq!(p.notes().text_for(SlideId(1)), None);

    p.complete_notes(SlideId(2), "notes for two".to_string());
    p.retreat();
    assert_eq!(p.notes().text_for(p.current_slide().id), None);
    assert_eq!(p.notes().text_for(SlideId(2)), Some("notes for two"));
}

#[test]
fn test_stale_notes_completion_is_dropped() {
    let mut p = presenter();
    p.request_notes().unwrap();
    p.complete_notes(SlideId(3), "wrong slide".to_string());
    assert!(p.notes().is_loading());
    assert_eq!(p.notes().slide_id(), Some(SlideId(1)));
}

#[test]
fn test_notes_job_carries_merged_slide() {
    let mut p = presenter();
    let job = p.request_image().unwrap();
    p.complete_image(job.slide_id, Ok(Some(png())));

    let notes = p.request_notes().unwrap();
    assert_eq!(notes.slide.artifact(), Some(&png()));
}

#[test]
fn test_close_keeps_notes_for_reopen() {
    let mut p = presenter();
    p.request_notes().unwrap();
    p.complete_notes(SlideId(1), "kept".to_string());
    p.close_notes();
    assert!(!p.notes().open);
    assert!(matches!(p.notes().phase, NotesPhase::Ready { .. }));

    assert!(p.request_notes().is_none());
    assert!(p.notes().open);
}

#[test]
fn test_ticks_animate_loading_notes() {
    let mut p = presenter();
    p.request_notes().unwrap();
    p.on_tick();
    p.on_tick();
    assert!(matches!(
        p.notes().phase,
        NotesPhase::Loading { animation_tick: 2, .. }
    ));
}
