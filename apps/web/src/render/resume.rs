//! The 履歴書 layout: a fixed sequence of title, date stamp, and four sections.

use chrono::NaiveDate;

use crate::layout::{Align, FontFamily, Ink, LaidOutDocument, PageConfig, TextFlow, TextStyle};
use crate::models::ResumeSubmission;
use crate::render::date::{as_of_stamp, format_birth};

pub const TITLE: &str = "履　歴　書";

pub const SECTION_BASIC: &str = "基本情報";
pub const SECTION_EXPERIENCE: &str = "職歴・保育経験";
pub const SECTION_MOTIVATION: &str = "志望動機・自己PR等";
pub const SECTION_REQUESTS: &str = "本人希望記入欄";

pub const LABEL_NAME: &str = "氏名";
pub const LABEL_FURIGANA: &str = "ふりがな";
pub const LABEL_BIRTH: &str = "生年月日";
pub const LABEL_ADDRESS: &str = "住所";
pub const LABEL_PHONE: &str = "電話番号";
pub const LABEL_EMAIL: &str = "メールアドレス";
pub const LABEL_DESIRED_POSITION: &str = "希望職種・勤務形態";

pub const PLACEHOLDER_EXPERIENCE: &str = "（ここにこれまでの保育園・勤務経験を記入）";
pub const PLACEHOLDER_MOTIVATION: &str = "（ここに応募先への志望動機や自己PRを記入）";
pub const PLACEHOLDER_REQUESTS: &str = "（勤務時間・通勤時間・扶養内勤務希望などがあれば記入）";

const TITLE_SIZE: f32 = 20.0;
const STAMP_SIZE: f32 = 10.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 11.0;
const FREE_TEXT_LINE_GAP: f32 = 2.0;
const HEADING_RULE_OFFSET: f32 = 2.0;

/// Lays out a résumé for `submission`, stamped with `today`.
pub fn lay_out_resume(
    submission: &ResumeSubmission,
    today: NaiveDate,
    font: FontFamily,
    page: PageConfig,
) -> LaidOutDocument {
    let mut flow = TextFlow::new(font, page);

    flow.text(TITLE, TextStyle::new(TITLE_SIZE).align(Align::Center));
    flow.move_down(0.5);
    flow.text(&as_of_stamp(today), TextStyle::new(STAMP_SIZE).align(Align::Right));
    flow.move_down(0.3);
    flow.rule(0.0, 0.7);
    flow.move_down(0.8);

    section_heading(&mut flow, SECTION_BASIC);
    labeled_line(&mut flow, LABEL_NAME, &submission.name);
    labeled_line(&mut flow, LABEL_FURIGANA, &submission.furigana);
    labeled_line(&mut flow, LABEL_BIRTH, &format_birth(&submission.birth));
    labeled_line(&mut flow, LABEL_ADDRESS, &submission.address);
    labeled_line(&mut flow, LABEL_PHONE, &submission.phone);
    labeled_line(&mut flow, LABEL_EMAIL, &submission.email);

    section_heading(&mut flow, SECTION_EXPERIENCE);
    if let Some(position) = submission.desired_position() {
        labeled_line(&mut flow, LABEL_DESIRED_POSITION, position);
        flow.move_down(0.4);
    }
    free_text(&mut flow, submission.experience(), PLACEHOLDER_EXPERIENCE);

    section_heading(&mut flow, SECTION_MOTIVATION);
    free_text(&mut flow, submission.pr_text(), PLACEHOLDER_MOTIVATION);

    section_heading(&mut flow, SECTION_REQUESTS);
    flow.text(
        PLACEHOLDER_REQUESTS,
        TextStyle::new(BODY_SIZE)
            .ink(Ink::Placeholder)
            .line_gap(FREE_TEXT_LINE_GAP),
    );

    flow.move_down(3.0);
    flow.finish()
}

/// Heading text with a rule two points below it.
fn section_heading(flow: &mut TextFlow, title: &str) {
    flow.move_down(0.8);
    let block = flow.line_height_pt(HEADING_SIZE) + HEADING_RULE_OFFSET;
    flow.keep_together(block);
    flow.text(title, TextStyle::new(HEADING_SIZE));
    flow.rule(HEADING_RULE_OFFSET, 0.6);
    flow.move_down(0.4);
}

fn labeled_line(flow: &mut TextFlow, label: &str, value: &str) {
    flow.text(&format!("{label}\u{3000}{value}"), TextStyle::new(BODY_SIZE));
}

fn free_text(flow: &mut TextFlow, value: Option<&str>, placeholder: &str) {
    match value {
        Some(text) => flow.text(text, TextStyle::new(BODY_SIZE).line_gap(FREE_TEXT_LINE_GAP)),
        None => flow.text(placeholder, TextStyle::new(BODY_SIZE).ink(Ink::Placeholder)),
    }
}
