//! Pure HTML fragment builders. Every function maps loaded content to a
//! markup `String`; nothing here touches the network or the mount.
//!
//! Missing optional fields always render as empty strings — a fragment must
//! never contain a literal "undefined" or "null", and rendering never
//! panics.

use std::collections::HashSet;

use crate::grouping::{rank, Grouped};
use crate::icons;
use crate::models::{Item, Sightseeing};
use crate::sections::{Bucket, BucketFilter, RowTemplate};
use crate::toggle::ViewMode;

/// Rendering knobs shared across sections.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Locality suffix appended to synthesized map search queries.
    pub locality: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            locality: "Madrid".to_string(),
        }
    }
}

// ── Shared helpers ──────────────────────────────────────────

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub(crate) fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(b as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", b));
            }
        }
    }
    result
}

/// Map link for an item: an explicit external link wins; otherwise a map
/// search URL is synthesized from the address (or the title, as a last
/// resort) plus the configured locality.
pub fn maps_url(item: &Item, cfg: &RenderConfig) -> String {
    if let Some(link) = item.map_link.as_deref() {
        return link.to_string();
    }
    let subject = item.address.as_deref().unwrap_or(&item.title);
    let query = format!("{}, {}", subject, cfg.locality);
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        percent_encode(&query)
    )
}

// ── Compact list items (food / nightlife grid) ──────────────

/// One compact list entry: title with optional top-pick badge, linked
/// address, "neighborhood • price" meta line, blurb, must-book note.
pub fn render_list_item(item: &Item, cfg: &RenderConfig) -> String {
    let maps = maps_url(item, cfg);

    let mut meta_parts: Vec<String> = Vec::new();
    if let Some(n) = item.neighborhood.as_deref() {
        meta_parts.push(html_escape(n));
    }
    if let Some(p) = item.price_range.as_deref() {
        meta_parts.push(html_escape(p));
    }
    let meta_line = if meta_parts.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"list-item__meta\">{}</div>",
            meta_parts.join(" • ")
        )
    };

    let description = item.blurb();
    let description_html = if description.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"list-item__description\">{}</div>",
            html_escape(description)
        )
    };

    let special_note = if item.must_book {
        "<div class=\"list-item__note\">Must book</div>"
    } else {
        ""
    };

    let top_pick_badge = if item.top_pick {
        "<span class=\"top-pick-badge\">Top Pick</span>"
    } else {
        ""
    };
    let item_class = if item.top_pick {
        "list-item list-item--top-pick"
    } else {
        "list-item"
    };

    let address_html = match item.address.as_deref() {
        Some(addr) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"list-item__address\">{}</a>",
            maps,
            html_escape(addr)
        ),
        None => String::new(),
    };

    format!(
        "<div class=\"{}\"><div class=\"list-item__title\">{}{}</div>{}{}{}{}</div>",
        item_class,
        html_escape(&item.title),
        top_pick_badge,
        address_html,
        meta_line,
        description_html,
        special_note
    )
}

/// The whole grouped list for a toggle-enabled section.
///
/// Each category renders its header, then its items top-picks-first. In
/// [`ViewMode::All`], the non-top-pick tail of a category is wrapped in a
/// marker node carrying the category label so the inline toggle can flip
/// its visibility later without a re-render; `collapsed` holds the labels
/// whose tail starts hidden. In [`ViewMode::TopPicksOnly`] only top picks
/// are rendered and categories without any are omitted.
pub fn render_grouped_list(
    groups: &Grouped,
    mode: ViewMode,
    collapsed: &HashSet<String>,
    cfg: &RenderConfig,
) -> String {
    let mut html = String::from("<div class=\"list-grid__group\">");

    for (label, items) in groups {
        let ranked = rank(items);
        let boundary = ranked.iter().filter(|i| i.top_pick).count();
        let (head, tail) = ranked.split_at(boundary);

        match mode {
            ViewMode::TopPicksOnly => {
                if head.is_empty() {
                    continue;
                }
                html.push_str(&format!(
                    "<div class=\"list-grid__category-header\">{}</div>",
                    html_escape(label)
                ));
                for item in head {
                    html.push_str(&render_list_item(item, cfg));
                }
            }
            ViewMode::All => {
                if ranked.is_empty() {
                    continue;
                }
                html.push_str(&format!(
                    "<div class=\"list-grid__category-header\">{}</div>",
                    html_escape(label)
                ));
                for item in head {
                    html.push_str(&render_list_item(item, cfg));
                }
                if head.is_empty() {
                    // No top-pick boundary, so nothing to collapse behind.
                    for item in tail {
                        html.push_str(&render_list_item(item, cfg));
                    }
                } else if !tail.is_empty() {
                    let is_collapsed = collapsed.contains(label.as_str());
                    let hidden_attr = if is_collapsed { " hidden" } else { "" };
                    html.push_str(&format!(
                        "<div class=\"list-grid__extra\" data-category=\"{}\"{}>",
                        html_escape(label),
                        hidden_attr
                    ));
                    for item in tail {
                        html.push_str(&render_list_item(item, cfg));
                    }
                    html.push_str("</div>");
                    html.push_str(&format!(
                        "<a href=\"#\" class=\"list-grid__more\" data-category=\"{}\">{}</a>",
                        html_escape(label),
                        if is_collapsed { "Show more" } else { "Show fewer" }
                    ));
                }
            }
        }
    }

    html.push_str("</div>");
    html
}

// ── Category cards ──────────────────────────────────────────

fn render_row(item: &Item, template: RowTemplate) -> String {
    let name = html_escape(&item.title);
    match template {
        RowTemplate::Neighborhood => {
            let best_for = item.best_for.as_deref().unwrap_or("");
            let vibe = item.vibe.as_deref().unwrap_or("");
            let description = match (best_for.is_empty(), vibe.is_empty()) {
                (false, false) => {
                    format!("Best for: {} • {}", html_escape(best_for), html_escape(vibe))
                }
                (false, true) => format!("Best for: {}", html_escape(best_for)),
                (true, false) => html_escape(vibe),
                (true, true) => String::new(),
            };
            format!(
                "<li class=\"category-list__item\"><strong class=\"item__name\">{}</strong><span class=\"item__description\">{}</span></li>",
                name, description
            )
        }
        RowTemplate::Blurb => format!(
            "<li class=\"category-list__item\"><strong class=\"item__name\">{}</strong><span class=\"item__description\">{}</span></li>",
            name,
            html_escape(item.blurb())
        ),
        RowTemplate::Rule => format!(
            "<li class=\"category-list__item\"><strong class=\"item__name\">{}</strong><span class=\"item__description\">{}</span></li>",
            name,
            html_escape(item.rule.as_deref().unwrap_or(""))
        ),
        RowTemplate::Venue | RowTemplate::VenueNoPrice => {
            let place = item
                .address
                .as_deref()
                .or(item.neighborhood.as_deref())
                .unwrap_or("");
            let address_html = match item.map_link.as_deref() {
                Some(link) => format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"item__address\">{}</a>",
                    html_escape(link),
                    html_escape(place)
                ),
                None => format!("<span class=\"item__address\">{}</span>", html_escape(place)),
            };
            let price_html = if template == RowTemplate::Venue {
                format!(
                    "<span class=\"item__price\">{}</span>",
                    html_escape(item.price_range.as_deref().unwrap_or(""))
                )
            } else {
                String::new()
            };
            format!(
                "<li class=\"category-list__item\"><strong class=\"item__name\">{}</strong>{}{}<span class=\"item__description\">{}</span></li>",
                name,
                address_html,
                price_html,
                html_escape(item.blurb())
            )
        }
    }
}

fn bucket_members<'a>(items: &'a [Item], bucket: &Bucket, table: &[Bucket]) -> Vec<&'a Item> {
    match bucket.filter {
        BucketFilter::Categories(names) => items
            .iter()
            .filter(|i| matches!(i.category.as_deref(), Some(c) if names.contains(&c)))
            .collect(),
        BucketFilter::Rest => {
            // Everything no Categories bucket in this table claims.
            let claimed: Vec<&str> = table
                .iter()
                .filter_map(|b| match b.filter {
                    BucketFilter::Categories(names) => Some(names),
                    BucketFilter::Rest => None,
                })
                .flatten()
                .copied()
                .collect();
            items
                .iter()
                .filter(|i| !matches!(i.category.as_deref(), Some(c) if claimed.contains(&c)))
                .collect()
        }
    }
}

/// One container card for a whole section, optionally sub-grouped into the
/// section's named buckets. Empty buckets are omitted entirely; with no
/// bucket table the card is a single flat list.
pub fn render_category_card(items: &[Item], template: RowTemplate, buckets: &[Bucket]) -> String {
    let mut html = String::from("<article class=\"category-card\">");

    if buckets.is_empty() {
        html.push_str("<ul class=\"category-list\">");
        for item in items {
            html.push_str(&render_row(item, template));
        }
        html.push_str("</ul>");
    } else {
        for bucket in buckets {
            let members = bucket_members(items, bucket, buckets);
            if members.is_empty() {
                continue;
            }
            html.push_str(&format!(
                "<h3 class=\"category-card__subtitle\">{}</h3><ul class=\"category-list\">",
                html_escape(bucket.heading)
            ));
            for item in members {
                html.push_str(&render_row(item, template));
            }
            html.push_str("</ul>");
        }
    }

    html.push_str("</article>");
    html
}

// ── Individual cards (walks, museums, day trips) ────────────

/// Self-contained card for one item. Optional fields (how to get there,
/// ticket info, ticket link, map link) only appear when present.
pub fn render_individual_card(item: &Item) -> String {
    let mut html = format!(
        "<article class=\"content-card\"><h3 class=\"card__title\">{}</h3>",
        html_escape(&item.title)
    );

    let mut meta = String::new();
    if let Some(n) = item.neighborhood.as_deref() {
        meta.push_str(&format!(
            "<span class=\"card__location\">{}{}</span>",
            icons::LOCATION,
            html_escape(n)
        ));
    }
    if let Some(t) = item.travel_time.as_deref() {
        meta.push_str(&format!(
            "<span class=\"card__travel-time\">{}{}</span>",
            icons::CLOCK,
            html_escape(t)
        ));
    }
    if !meta.is_empty() {
        html.push_str(&format!("<div class=\"card__meta\">{}</div>", meta));
    }

    if let Some(known_for) = item.known_for.as_deref() {
        html.push_str(&format!(
            "<p class=\"card__known-for\"><strong>Known for:</strong> {}</p>",
            html_escape(known_for)
        ));
    }
    if let Some(how) = item.how_to_get_there.as_deref() {
        html.push_str(&format!(
            "<p class=\"card__how-to-get-there\"><strong>How to get there:</strong> {}</p>",
            html_escape(how)
        ));
    }
    if let Some(info) = item.ticket_info.as_deref() {
        html.push_str(&format!(
            "<p class=\"card__ticket-info\"><strong>Tickets:</strong> {}</p>",
            html_escape(info)
        ));
    }
    if let Some(link) = item.ticket_link.as_deref() {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"card__ticket-link\">{}Buy Tickets</a>",
            html_escape(link),
            icons::TICKET
        ));
    }
    if let Some(link) = item.map_link.as_deref() {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"card__map-link\">{}View Route on Map</a>",
            html_escape(link),
            icons::MAP
        ));
    }

    html.push_str("</article>");
    html
}

pub fn render_individual_cards(items: &[Item]) -> String {
    items.iter().map(render_individual_card).collect()
}

// ── Icon rows (must-try / don't-miss) ───────────────────────

pub fn render_must_try_rows(items: &[Item]) -> String {
    let mut html = String::new();
    for item in items {
        let where_html = match item.where_to.as_deref() {
            Some(w) => format!(
                "<span class=\"must-try-item__where\">{}</span>",
                html_escape(w)
            ),
            None => String::new(),
        };
        let tip_html = match item.tip.as_deref() {
            Some(t) => format!("<span class=\"must-try-item__tip\">💡 {}</span>", html_escape(t)),
            None => String::new(),
        };
        html.push_str(&format!(
            "<div class=\"must-try-item\"><span class=\"must-try-item__icon\">{}</span><div class=\"must-try-item__content\"><div class=\"must-try-item__title\">{}</div><div class=\"must-try-item__description\">{}</div>{}{}</div></div>",
            html_escape(item.icon.as_deref().unwrap_or("🍽️")),
            html_escape(&item.title),
            html_escape(item.description.as_deref().unwrap_or("")),
            where_html,
            tip_html
        ));
    }
    html
}

pub fn render_dont_miss_rows(items: &[Item]) -> String {
    let mut html = String::new();
    for item in items {
        let when_html = match item.when.as_deref() {
            Some(w) => format!(
                "<span class=\"dont-miss-item__when\">{}</span>",
                html_escape(w)
            ),
            None => String::new(),
        };
        let tip_html = match item.tip.as_deref() {
            Some(t) => format!("<span class=\"dont-miss-item__tip\">💡 {}</span>", html_escape(t)),
            None => String::new(),
        };
        let seasonal_badge = if item.seasonal {
            "<span class=\"dont-miss-item__seasonal\">Seasonal</span>"
        } else {
            ""
        };
        html.push_str(&format!(
            "<div class=\"dont-miss-item\"><span class=\"dont-miss-item__icon\">{}</span><div class=\"dont-miss-item__content\"><div class=\"dont-miss-item__title\">{}{}</div><div class=\"dont-miss-item__description\">{}</div>{}{}</div></div>",
            html_escape(item.icon.as_deref().unwrap_or("📍")),
            html_escape(&item.title),
            seasonal_badge,
            html_escape(item.description.as_deref().unwrap_or("")),
            when_html,
            tip_html
        ));
    }
    html
}

// ── Neighborhoods (alternating image layout) ────────────────

fn neighborhood_image(item: &Item) -> String {
    if let Some(image) = item.image.as_deref() {
        return image.to_string();
    }
    let slug = item
        .title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("images/neighborhoods/{}.jpg", slug)
}

/// Alternating left/right image layout, one block per neighborhood.
pub fn render_neighborhood_feature(items: &[Item]) -> String {
    let mut html = String::new();
    for (index, item) in items.iter().enumerate() {
        let side_class = if index % 2 == 0 {
            "neighborhood-item--image-right"
        } else {
            "neighborhood-item--image-left"
        };
        let description = item
            .best_for
            .as_deref()
            .or(item.description.as_deref())
            .unwrap_or("");
        html.push_str(&format!(
            "<div class=\"neighborhood-item {}\"><div class=\"neighborhood-item__content\"><h3 class=\"neighborhood-item__title\">{}</h3><p class=\"neighborhood-item__description\">{}</p><p class=\"neighborhood-item__vibe\">{}</p></div><div class=\"neighborhood-item__image\"><img src=\"{}\" alt=\"{} neighborhood\" loading=\"lazy\"></div></div>",
            side_class,
            html_escape(&item.title),
            html_escape(description),
            html_escape(item.vibe.as_deref().unwrap_or("")),
            html_escape(&neighborhood_image(item)),
            html_escape(&item.title)
        ));
    }
    html
}

// ── Sightseeing and intro ───────────────────────────────────

pub fn render_sightseeing(data: &Sightseeing) -> String {
    let mut html = String::new();
    for category in &data.categories {
        html.push_str(&format!(
            "<div class=\"sightseeing-category\"><h3 class=\"sightseeing-category__title\">{}</h3><ul class=\"sightseeing-category__list\">",
            html_escape(&category.title)
        ));
        for entry in &category.items {
            html.push_str(&format!(
                "<li class=\"sightseeing-category__item\">{}</li>",
                html_escape(entry)
            ));
        }
        html.push_str("</ul></div>");
    }
    html
}

/// Intro text: blank-line-separated paragraphs, the first becomes the
/// heading, the rest become body text. Empty input renders nothing.
pub fn render_intro(text: &str) -> String {
    let paragraphs: Vec<&str> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    let Some((heading, body)) = paragraphs.split_first() else {
        return String::new();
    };
    let mut html = format!("<h2 class=\"intro__heading\">{}</h2>", html_escape(heading));
    for para in body {
        html.push_str(&format!("<p class=\"intro__text\">{}</p>", html_escape(para)));
    }
    html
}
