//! HTML rendering for the passenger form.
//!
//! Pure templating: every function maps its input to a complete document with
//! no side effects, so identical input always renders identical markup. The
//! form field names are part of the wire contract with the prediction handler
//! and must match [`lifeboat_core::PassengerForm`].

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; background: #f0f2f5; margin: 0; \
display: flex; justify-content: center; align-items: center; min-height: 100vh; }\n\
.container { background: #fff; padding: 2rem 3rem; border-radius: 12px; \
box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08); width: 100%; max-width: 480px; }\n\
h1 { color: #1c294e; text-align: center; font-size: 1.6rem; }\n\
form { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }\n\
label { font-weight: 600; display: block; margin-bottom: 0.4rem; }\n\
input, select { padding: 0.6rem; border: 1px solid #dcdcdc; border-radius: 8px; \
width: 100%; box-sizing: border-box; }\n\
.full-width { grid-column: 1 / -1; }\n\
button { grid-column: 1 / -1; padding: 0.7rem; font-weight: 700; color: #fff; \
background: #365899; border: none; border-radius: 8px; cursor: pointer; }\n\
.result { text-align: center; font-size: 1.2rem; font-weight: 700; }\n\
.survived { color: #28a745; }\n\
.not-survived { color: #dc3545; }\n";

const FORM: &str = r#"<form action="/predict" method="post">
<div>
<label for="pclass">Passenger Class</label>
<select id="pclass" name="pclass">
<option value="1">1st Class</option>
<option value="2">2nd Class</option>
<option value="3">3rd Class</option>
</select>
</div>
<div>
<label for="sex">Sex</label>
<select id="sex" name="sex">
<option value="male">Male</option>
<option value="female">Female</option>
</select>
</div>
<div>
<label for="age">Age</label>
<input type="number" id="age" name="age" placeholder="e.g., 29" step="0.1" required>
</div>
<div>
<label for="fare">Fare</label>
<input type="number" id="fare" name="fare" placeholder="e.g., 32.2" step="0.01" required>
</div>
<div>
<label for="sibsp">Siblings/Spouses Aboard</label>
<input type="number" id="sibsp" name="sibsp" value="0" min="0">
</div>
<div>
<label for="parch">Parents/Children Aboard</label>
<input type="number" id="parch" name="parch" value="0" min="0">
</div>
<div class="full-width">
<label for="embarked">Port of Embarkation</label>
<select id="embarked" name="embarked">
<option value="S">Southampton (S)</option>
<option value="C">Cherbourg (C)</option>
<option value="Q">Queenstown (Q)</option>
</select>
</div>
<button type="submit">Predict Survival</button>
</form>"#;

/// Render the form page, with the prediction or error sentence shown inline.
///
/// An empty `prediction_text` renders no result block at all.
pub fn page(prediction_text: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Titanic Survival Prediction</title>\n\
         <style>{STYLE}</style>\n</head>\n<body>\n<div class=\"container\">\n\
         <h1>Titanic Survival Prediction</h1>\n{result}{FORM}\n</div>\n</body>\n</html>\n",
        result = result_block(prediction_text),
    )
}

/// The fixed document served while the classifier artifact is unavailable.
pub fn unavailable(model_file: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>Titanic Survival Prediction</title>\n\
         </head>\n<body>\n\
         <h1 style=\"color: #dc3545;\">Error: classifier artifact '{file}' is not loaded. \
         Check the server log.</h1>\n\
         </body>\n</html>\n",
        file = escape_html(model_file),
    )
}

fn result_block(prediction_text: &str) -> String {
    if prediction_text.is_empty() {
        return String::new();
    }
    let class = if prediction_text.starts_with("Prediction: Survived") {
        "result survived"
    } else {
        "result not-survived"
    };
    format!(
        "<p class=\"{class}\">{}</p>\n",
        escape_html(prediction_text)
    )
}

/// Minimal HTML escaping; the error sentence echoes user input.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_renders_no_result_block() {
        let html = page("");
        assert!(!html.contains("class=\"result"));
    }

    #[test]
    fn form_carries_every_wire_field() {
        let html = page("");
        for field in ["pclass", "sex", "age", "sibsp", "parch", "fare", "embarked"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
        assert!(html.contains("action=\"/predict\""));
    }

    #[test]
    fn survived_and_not_survived_get_distinct_styles() {
        let survived = page("Prediction: Survived (81.2% confidence)");
        assert!(survived.contains("result survived"));

        let lost = page("Prediction: Not Survived (70.0% confidence)");
        assert!(lost.contains("result not-survived"));
    }

    #[test]
    fn error_text_is_styled_like_a_loss() {
        let html = page("Error during prediction: field 'age' is not a valid number: 'abc'");
        assert!(html.contains("result not-survived"));
    }

    #[test]
    fn result_text_is_escaped() {
        let html = page("Error during prediction: <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let text = "Prediction: Survived (99.9% confidence)";
        assert_eq!(page(text), page(text));
    }

    #[test]
    fn unavailable_page_names_the_artifact() {
        let html = unavailable("titanic_survival.json");
        assert!(html.contains("titanic_survival.json"));
        assert!(html.contains("not loaded"));
    }
}
