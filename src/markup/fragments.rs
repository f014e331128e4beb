//! The fragments of a rendered post, in pipeline order.

use super::blocks::{block, escape, json_string, shortcode};
use super::embed::recognize_video_host;
use super::title::post_title;
use super::RenderContext;

const IMAGE_ATTRS: &str =
    r#"{"width":"250px","sizeSlug":"full","linkDestination":"none","align":"center"}"#;
const BUTTONS_ATTRS: &str =
    r#"{"layout":{"type":"flex","justifyContent":"center","orientation":"vertical"}}"#;
const PLACEHOLDER_ID: &str = "XXXX";

fn heading(text: &str) -> String {
    block(
        "heading",
        None,
        &format!(r#"<h2 class="wp-block-heading">{text}</h2>"#),
    )
}

fn centered_heading(class: &str, id: Option<&str>, text: &str) -> String {
    let attrs = format!(r#"{{"textAlign":"center","className":"{class}"}}"#);
    let id_attr = id.map(|id| format!(r#" id="{id}""#)).unwrap_or_default();
    block(
        "heading",
        Some(&attrs),
        &format!(
            r#"<h2 class="wp-block-heading has-text-align-center {class}"{id_attr}>{text}</h2>"#
        ),
    )
}

fn list(items: &[String]) -> String {
    let items: String = items.iter().map(|item| format!("<li>{item}</li>\n")).collect();
    block("list", None, &format!("<ul class=\"wp-block-list\">\n{items}</ul>"))
}

fn fact(label: &str, value: &str) -> String {
    format!("<strong>{label}</strong>: {}", escape(value))
}

fn button(label: &str, href: &str) -> String {
    format!(
        r#"<div class="wp-block-button"><a class="wp-block-button__link wp-element-button" href="{}" target="_blank" rel="noreferrer noopener nofollow">{}</a></div>"#,
        escape(href),
        escape(label)
    )
}

/// `2hr 12min` style runtime.
pub(crate) fn format_duration(minutes: u32) -> String {
    format!("{}hr {}min", minutes / 60, minutes % 60)
}

/// Poster, title and facts in a two-column layout.
pub(crate) fn quick_info(ctx: &RenderContext<'_>) -> Option<String> {
    let model = ctx.model;
    let details = &model.details;

    let poster = if model.poster_url.is_empty() {
        String::new()
    } else {
        block(
            "image",
            Some(IMAGE_ATTRS),
            &format!(
                "<figure class=\"wp-block-image aligncenter size-full is-resized\">\n<img src=\"{}\" alt=\"{}\" style=\"width:250px\"/>\n</figure>",
                escape(&model.poster_url),
                escape(&model.title)
            ),
        )
    };

    let mut facts = vec![
        fact("Title", &model.title),
        fact("Original title", details.original_title.as_deref().unwrap_or("")),
    ];
    if model.media_type.is_series() {
        facts.push(fact("Season", &ctx.style.season.to_string()));
        facts.push(fact("Episodes", &model.links.len().to_string()));
    } else {
        let duration = details.runtime_minutes.map(format_duration).unwrap_or_default();
        facts.push(fact("Duration", &duration));
    }
    facts.push(fact("Genre", &details.genres.join(", ")));
    facts.push(fact("Language", &ctx.style.languages));
    facts.push(fact("Subtitle", &ctx.style.subtitles));
    facts.push(fact("Format", &ctx.style.format));

    let inner = format!(
        "<div class=\"wp-block-columns quick_info\">\n\
         <div class=\"wp-block-column\" style=\"flex-basis:33.33%\">\n{poster}\n</div>\n\
         <div class=\"wp-block-column\" style=\"flex-basis:66.66%\">\n{}\n{}\n</div>\n\
         </div>",
        heading(&escape(&model.display_title())),
        list(&facts)
    );
    Some(block("columns", Some(r#"{"className":"quick_info"}"#), &inner))
}

pub(crate) fn download_heading(ctx: &RenderContext<'_>) -> Option<String> {
    let title = post_title(ctx.model, ctx.style);
    Some(centered_heading("dl_head", Some("dl_head"), &escape(&title)))
}

/// Collapsible download section with one button per link.
pub(crate) fn download_links(ctx: &RenderContext<'_>) -> Option<String> {
    let model = ctx.model;
    let languages = format!("{{{}}}", escape(&ctx.style.languages));
    let button_heading = if model.media_type.is_series() {
        format!(
            "Season {} (E{:02} Added) {languages}",
            ctx.style.season,
            model.links.len()
        )
    } else {
        languages
    };

    let buttons: String = model
        .links
        .iter()
        .map(|link| button(link.button_label(), &link.url))
        .collect();

    let parts = [
        shortcode(&[
            "[su_accordion]",
            r#"[su_spoiler class="file-spoiler" title="Download Links" open="yes" icon="arrow" style="fancy"]"#,
        ]),
        centered_heading("btn_head", None, &button_heading),
        block(
            "buttons",
            Some(BUTTONS_ATTRS),
            &format!("<div class=\"wp-block-buttons\">{buttons}</div>"),
        ),
        shortcode(&["[/su_spoiler]"]),
    ];
    Some(parts.join("\n\n"))
}

/// Reference links and site boilerplate; closes the accordion.
pub(crate) fn details(ctx: &RenderContext<'_>) -> Option<String> {
    let model = ctx.model;
    let details = &model.details;
    let imdb = details.imdb_id.as_deref().unwrap_or(PLACEHOLDER_ID);
    let tmdb = details.tmdb_id.as_deref().unwrap_or(PLACEHOLDER_ID);
    let kind = if model.media_type.is_series() {
        "Drama"
    } else {
        "Movie"
    };

    let parts = [
        shortcode(&[
            r#"[su_spoiler class="details-spoiler" title="Details" icon="plus" style="fancy"]"#,
        ]),
        heading("Details"),
        list(&[
            escape(&format!("https://www.imdb.com/title/{imdb}")),
            escape(&format!(
                "https://www.themoviedb.org/{}/{tmdb}",
                model.media_type.tmdb_path()
            )),
        ]),
        block(
            "paragraph",
            None,
            &format!(
                "<p>{} is the best Korean {kind} website to download {} in {} with English subtitles.</p>",
                escape(&ctx.style.site_name),
                escape(&model.display_title()),
                escape(&ctx.style.languages)
            ),
        ),
        shortcode(&["[/su_spoiler]", "[/su_accordion]"]),
    ];
    Some(parts.join("\n\n"))
}

/// Embedded trailer; omitted unless the URL is on a recognized host.
pub(crate) fn trailer(ctx: &RenderContext<'_>) -> Option<String> {
    let url = ctx.model.trailer_url.trim();
    let host = recognize_video_host(url)?;
    let slug = host.slug();

    let attrs = format!(
        r#"{{"url":{},"type":"video","providerNameSlug":"{slug}","responsive":true,"className":"wp-embed-aspect-16-9 wp-has-aspect-ratio"}}"#,
        json_string(url)
    );
    let inner = format!(
        "<figure class=\"wp-block-embed is-type-video is-provider-{slug} wp-block-embed-{slug} wp-embed-aspect-16-9 wp-has-aspect-ratio\">\n\
         <div class=\"wp-block-embed__wrapper\">\n{}\n</div>\n</figure>",
        escape(url)
    );
    Some(block("embed", Some(&attrs), &inner))
}
