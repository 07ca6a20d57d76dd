// page.rs
use ammonia::clean_text;

use crate::error::GenerationError;
use crate::workflow::{Generation, PromptMode};

const TITLE: &str = "DALL-E Playground";

const STYLE: &str = "
body { font-family: sans-serif; margin: 0; display: flex; min-height: 100vh; }
aside { width: 16rem; padding: 1.5rem; background: #f0f2f6; }
main { flex: 1; padding: 1.5rem 3rem; max-width: 60rem; }
input[type=text] { width: 100%; padding: .5rem; font-size: 1rem; box-sizing: border-box; }
figure { margin: 1.5rem 0; }
figure img { width: 100%; }
figcaption { color: #555; margin-top: .5rem; }
.error { background: #fde8e8; color: #8a1c1c; padding: 1rem; border-radius: .25rem; }
";

/// What the playground form shows back to the user.
pub struct PlaygroundForm<'a> {
    pub idea: &'a str,
    pub mode: PromptMode,
    pub selected_model: &'a str,
    pub models: &'a [String],
}

pub fn playground_page(form: &PlaygroundForm, outcome: Option<&Result<Generation, GenerationError>>) -> String {
    let model_options: String = form
        .models
        .iter()
        .map(|model| {
            let selected = if model == form.selected_model { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = clean_text(model),
                selected = selected
            )
        })
        .collect();

    let mode_radios: String = PromptMode::ALL
        .iter()
        .map(|mode| {
            let checked = if *mode == form.mode { " checked" } else { "" };
            format!(
                r#"<label><input type="radio" name="mode" form="idea-form" value="{label}"{checked}> {label}</label><br>"#,
                label = mode.label(),
                checked = checked
            )
        })
        .collect();

    let sidebar = format!(
        r#"<aside>
<label for="model">Model</label><br>
<select id="model" name="model" form="idea-form">{model_options}</select>
<p>Prompt type</p>
<div>{mode_radios}</div>
</aside>"#
    );

    layout(Some(&sidebar), "/", form.idea, outcome)
}

pub fn simple_page(idea: &str, outcome: Option<&Result<Generation, GenerationError>>) -> String {
    layout(None, "/simple", idea, outcome)
}

fn layout(
    sidebar: Option<&str>,
    action: &str,
    idea: &str,
    outcome: Option<&Result<Generation, GenerationError>>,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{sidebar}
<main>
<h1>{title}</h1>
<form id="idea-form" method="get" action="{action}">
<label for="idea">Enter your idea here</label>
<input type="text" id="idea" name="idea" value="{idea}" autofocus>
</form>
{outcome}
</main>
</body>
</html>
"#,
        title = TITLE,
        style = STYLE,
        sidebar = sidebar.unwrap_or_default(),
        action = action,
        idea = clean_text(idea),
        outcome = outcome.map(render_outcome).unwrap_or_default(),
    )
}

fn render_outcome(outcome: &Result<Generation, GenerationError>) -> String {
    match outcome {
        Ok(generation) => format!(
            r#"<figure><img src="{url}" alt="{caption}"><figcaption>{caption}</figcaption></figure>"#,
            url = clean_text(&generation.image_url),
            caption = clean_text(&generation.caption),
        ),
        Err(err) => format!(r#"<div class="error">{}</div>"#, clean_text(&err.to_string())),
    }
}
