use super::{escape_html, layout};

/// Form fields of the 職務経歴書 form, in display order.
const CAREER_FIELDS: [(&str, &str, bool); 7] = [
    ("name", "氏名", false),
    ("summary", "職務要約", true),
    ("company", "勤務先", false),
    ("period", "在籍期間", false),
    ("role", "担当・役職", false),
    ("duties", "業務内容", true),
    ("skills", "資格・スキル", true),
];

pub fn index_page() -> String {
    layout(
        "保育士のための書類作成",
        r#"<h1>保育士のための書類作成</h1>
<p>フォームに入力するだけで、応募書類を作成できます。</p>
<ul class="menu">
  <li><a href="/resume">履歴書を作成する（PDF）</a></li>
  <li><a href="/career">職務経歴書を作成する</a></li>
</ul>"#,
    )
}

pub fn resume_form() -> String {
    layout(
        "履歴書作成",
        r#"<h1>履歴書作成</h1>
<form method="post" action="/generate">
  <label>氏名 <input type="text" name="name"></label>
  <label>ふりがな <input type="text" name="furigana"></label>
  <label>生年月日 <input type="date" name="birth"></label>
  <label>住所 <input type="text" name="address"></label>
  <label>電話番号 <input type="tel" name="phone"></label>
  <label>メールアドレス <input type="email" name="email"></label>
  <label>希望職種・勤務形態 <input type="text" name="desiredPosition" placeholder="例：保育士（正社員）"></label>
  <label>職歴・保育経験 <textarea name="experience" rows="6"></textarea></label>
  <label>志望動機・自己PR <textarea name="prText" rows="6"></textarea></label>
  <button type="submit">PDFをダウンロード</button>
</form>
<p><a href="/">トップへ戻る</a></p>"#,
    )
}

pub fn career_form() -> String {
    let mut body = String::from("<h1>職務経歴書作成</h1>\n<form method=\"post\" action=\"/career/preview\">\n");
    for (key, label, multiline) in CAREER_FIELDS {
        if multiline {
            body.push_str(&format!(
                "  <label>{label} <textarea name=\"{key}\" rows=\"5\"></textarea></label>\n"
            ));
        } else {
            body.push_str(&format!(
                "  <label>{label} <input type=\"text\" name=\"{key}\"></label>\n"
            ));
        }
    }
    body.push_str("  <button type=\"submit\">プレビュー</button>\n</form>\n");
    body.push_str("<p><a href=\"/\">トップへ戻る</a></p>");
    layout("職務経歴書作成", &body)
}

fn career_label(key: &str) -> &str {
    CAREER_FIELDS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, label, _)| *label)
        .unwrap_or(key)
}

/// Echoes the submitted fields back, in submission order.
pub fn career_preview(fields: &[(String, String)]) -> String {
    let mut body = String::from("<h1>職務経歴書プレビュー</h1>\n<dl class=\"preview\">\n");
    for (key, value) in fields {
        body.push_str(&format!(
            "  <dt>{}</dt>\n  <dd>{}</dd>\n",
            escape_html(career_label(key)),
            escape_html(value).replace('\n', "<br>\n")
        ));
    }
    body.push_str("</dl>\n<p><a href=\"/career\">入力に戻る</a></p>");
    layout("職務経歴書プレビュー", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_form_posts_every_intake_field() {
        let html = resume_form();
        assert!(html.contains("action=\"/generate\""));
        for name in [
            "name",
            "furigana",
            "email",
            "phone",
            "address",
            "birth",
            "desiredPosition",
            "experience",
            "prText",
        ] {
            assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
        }
    }

    #[test]
    fn test_index_links_both_forms() {
        let html = index_page();
        assert!(html.contains("href=\"/resume\""));
        assert!(html.contains("href=\"/career\""));
    }

    #[test]
    fn test_career_form_posts_to_preview() {
        let html = career_form();
        assert!(html.contains("action=\"/career/preview\""));
        assert!(html.contains("<textarea name=\"duties\""));
    }

    #[test]
    fn test_preview_escapes_and_keeps_order() {
        let fields = vec![
            ("company".to_string(), "<b>ひまわり</b>".to_string()),
            ("extra".to_string(), "一行目\n二行目".to_string()),
        ];
        let html = career_preview(&fields);
        assert!(html.contains("<dt>勤務先</dt>"));
        assert!(html.contains("&lt;b&gt;ひまわり&lt;/b&gt;"));
        assert!(html.contains("<dt>extra</dt>"));
        assert!(html.contains("一行目<br>\n二行目"));
        assert!(html.find("勤務先").unwrap() < html.find("extra").unwrap());
    }
}
