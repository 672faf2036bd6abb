//! Post view — title, date, body segments, CC statement.
//!
//! Code blocks render as plain monospace until the highlight worker has
//! delivered spans for them; the view swaps in the colored layout on a
//! later frame without blocking.

use super::{PageAction, DATE_COLOR};
use crate::content::{Post, Segment};
use crate::highlight::{HighlightSpan, SpanKind};
use crate::i18n::{tr, TranslationKey};
use egui::{text::LayoutJob, Color32, FontId, RichText, TextFormat, Ui};
use std::collections::HashMap;

const LICENSE_URL: &str = "http://creativecommons.org/licenses/by/4.0/";

/// Code block background (independent of the app theme)
const CODE_BACKGROUND: Color32 = Color32::from_rgb(13, 17, 23);

/// Render a post
pub fn render_post(
    ui: &mut Ui,
    post: &Post,
    highlights: &HashMap<usize, Vec<HighlightSpan>>,
) -> Option<PageAction> {
    let mut action = None;

    if ui.link(format!("← {}", tr(TranslationKey::PostBack))).clicked() {
        action = Some(PageAction::ShowAllPosts);
    }

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(&post.title).size(24.0));
    });
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(post.date.format("%B %d, %Y").to_string())
                .small()
                .color(DATE_COLOR),
        );
    });
    ui.add_space(12.0);

    for (index, segment) in post.segments.iter().enumerate() {
        match segment {
            Segment::Paragraph { text } => {
                ui.label(RichText::new(text).size(15.0));
            }
            Segment::Code { source, .. } => {
                render_code_block(ui, highlights.get(&index), source);
            }
        }
        ui.add_space(10.0);
    }

    cc_statement(ui);

    action
}

fn render_code_block(ui: &mut Ui, spans: Option<&Vec<HighlightSpan>>, source: &str) {
    let job = match spans {
        Some(spans) => layout_spans(spans),
        None => plain_job(source),
    };

    egui::Frame::group(ui.style())
        .fill(CODE_BACKGROUND)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.label(job);
        });
}

fn layout_spans(spans: &[HighlightSpan]) -> LayoutJob {
    let mut job = LayoutJob::default();
    for span in spans {
        job.append(&span.text, 0.0, format_for(span.kind));
    }
    job
}

fn plain_job(source: &str) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(source, 0.0, format_for(SpanKind::Plain));
    job
}

fn format_for(kind: SpanKind) -> TextFormat {
    let color = match kind {
        SpanKind::Plain => Color32::LIGHT_GRAY,
        SpanKind::Keyword => Color32::from_rgb(86, 156, 214),
        SpanKind::Literal => Color32::from_rgb(206, 145, 120),
        SpanKind::Number => Color32::from_rgb(181, 206, 168),
        SpanKind::Comment => Color32::from_rgb(106, 153, 85),
    };
    TextFormat {
        font_id: FontId::monospace(12.0),
        color,
        ..Default::default()
    }
}

fn cc_statement(ui: &mut Ui) {
    ui.add_space(24.0);
    ui.separator();
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(RichText::new(tr(TranslationKey::CcText)).small());
        ui.hyperlink_to(
            RichText::new(tr(TranslationKey::CcLicenseName)).small(),
            LICENSE_URL,
        );
        ui.label(RichText::new(tr(TranslationKey::CcSuffix)).small());
    });
}
