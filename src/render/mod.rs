use crate::core::{FacadeThumbnail, PortfolioCard, Presentation, VideoPlayer};
use crate::utils::escape_html;

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

pub fn player_html(player: &VideoPlayer) -> String {
    presentation_html(&player.presentation())
}

pub fn presentation_html(presentation: &Presentation<'_>) -> String {
    match presentation {
        Presentation::Invalid => {
            r#"<div class="video-player video-invalid"><p>Invalid video URL</p></div>"#.to_string()
        }
        Presentation::Facade {
            thumbnail,
            provider,
            play_label,
        } => {
            let preview = match thumbnail {
                FacadeThumbnail::Image { src, alt } => format!(
                    r#"<img src="{}" alt="{}" loading="lazy">"#,
                    escape_html(src),
                    escape_html(alt)
                ),
                FacadeThumbnail::Fallback { text } => {
                    format!(r#"<span class="video-fallback">{}</span>"#, escape_html(text))
                }
            };

            format!(
                concat!(
                    r#"<div class="video-player">"#,
                    r#"<button type="button" class="video-facade" aria-label="{label}">"#,
                    "{preview}",
                    r#"<span class="video-play" aria-hidden="true">{icon}</span>"#,
                    r#"<span class="video-badge video-badge-{provider}">{provider}</span>"#,
                    "</button></div>"
                ),
                label = escape_html(play_label),
                preview = preview,
                icon = provider.icon(),
                provider = provider,
            )
        }
        Presentation::Embedded { embed_url, title } => format!(
            concat!(
                r#"<div class="video-player">"#,
                r#"<iframe src="{}" title="{}" allow="{}" allowfullscreen></iframe>"#,
                "</div>"
            ),
            escape_html(embed_url),
            escape_html(title),
            IFRAME_ALLOW
        ),
    }
}

pub fn card_html(card: &PortfolioCard<'_>) -> String {
    let entry = card.entry;
    let preview = match &card.thumbnail_url {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html(src),
            escape_html(&entry.title)
        ),
        None => format!(r#"<span class="card-fallback">{}</span>"#, escape_html(&entry.title)),
    };
    let badge = card
        .provider
        .map(|p| format!(r#"<span class="video-badge video-badge-{0}">{0}</span>"#, p))
        .unwrap_or_default();
    let category = entry
        .category
        .as_deref()
        .map(|c| format!(r#"<span class="card-category">{}</span>"#, escape_html(c)))
        .unwrap_or_default();

    format!(
        r#"<a class="portfolio-card" href="{}">{}{}{}<h3>{}</h3><p>{}</p></a>"#,
        escape_html(&entry.detail_path()),
        preview,
        badge,
        category,
        escape_html(&entry.title),
        escape_html(&entry.subtitle)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;

    #[test]
    fn test_invalid_notice_has_no_affordances() {
        let html = player_html(&VideoPlayer::new("not a url", "Nothing"));
        assert!(html.contains("Invalid video URL"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("Nothing"));
    }

    #[test]
    fn test_facade_markup() {
        let player = VideoPlayer::new("https://vimeo.com/1092377931", "Resin <Drive>");
        let html = player_html(&player);
        assert!(html.contains(r#"aria-label="Play Resin &lt;Drive&gt;""#));
        assert!(html.contains(r#"<img src="https://vumbnail.com/1092377931.jpg""#));
        assert!(html.contains(">vimeo</span>"));
        assert!(html.contains("▷"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_fallback_markup() {
        let mut player = VideoPlayer::new("https://youtu.be/dQw4w9WgXcQ", "Voices");
        player.thumbnail_failed();
        let html = player_html(&player);
        assert!(html.contains(r#"<span class="video-fallback">Voices</span>"#));
        assert!(!html.contains("<img"));
        assert!(html.contains("<button"));
    }

    #[test]
    fn test_embedded_markup() {
        let mut player = VideoPlayer::new("https://youtu.be/dQw4w9WgXcQ", "Voices");
        player.play();
        let html = player_html(&player);
        assert!(html.contains(
            r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&amp;rel=0&amp;modestbranding=1""#
        ));
        assert!(html.contains("allowfullscreen"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_card_markup() {
        let catalog = Catalog::default();
        let card = catalog.entries[0].card();
        let html = card_html(&card);
        assert!(html.starts_with(r#"<a class="portfolio-card" href="/portfolio/prototype-concept-video">"#));
        assert!(html.contains(">youtube</span>"));
        assert!(html.contains("<h3>PROTOTYPE CONCEPT VIDEO</h3>"));
    }
}
