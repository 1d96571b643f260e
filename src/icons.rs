//! Reusable inline SVG icons for the individual content cards.

pub const LOCATION: &str = r#"<svg class="icon" width="16" height="16" viewBox="0 0 16 16" fill="currentColor" aria-hidden="true">
    <path d="M8 0C5.2 0 3 2.2 3 5c0 3.5 5 11 5 11s5-7.5 5-11c0-2.8-2.2-5-5-5zm0 7c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2z"/>
  </svg>"#;

pub const CLOCK: &str = r#"<svg class="icon" width="16" height="16" viewBox="0 0 16 16" fill="currentColor" aria-hidden="true">
    <path d="M8 0C3.6 0 0 3.6 0 8s3.6 8 8 8 8-3.6 8-8-3.6-8-8-8zm0 14c-3.3 0-6-2.7-6-6s2.7-6 6-6 6 2.7 6 6-2.7 6-6 6z"/>
    <path d="M8 4v4.4l3.2 1.9-.8 1.3L6 9V4h2z"/>
  </svg>"#;

pub const MAP: &str = r#"<svg class="icon" width="16" height="16" viewBox="0 0 16 16" fill="currentColor" aria-hidden="true">
    <path d="M15.5 0.5L10.5 2.5L5.5 0.5L0.5 2.5V15.5L5.5 13.5L10.5 15.5L15.5 13.5V0.5ZM5.5 2.5L10.5 4.5V13.5L5.5 11.5V2.5Z"/>
  </svg>"#;

pub const TICKET: &str = r#"<svg class="icon" width="16" height="16" viewBox="0 0 16 16" fill="currentColor" aria-hidden="true">
    <path d="M15 5V2H1v3a1.5 1.5 0 0 1 0 3v3h14V8a1.5 1.5 0 0 1 0-3zM10 11H6v-1h4v1zm0-2.5H6v-1h4v1zM10 6H6V5h4v1z"/>
  </svg>"#;
