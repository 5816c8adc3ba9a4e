use crate::events::AppEvent;
use crate::gui::slider::{IMAGE_BLEED, SLIDE_HEIGHT, SLIDE_WIDTH};
use async_channel::Sender;
use barker::content::SlideRecord;
use gdk_pixbuf::Pixbuf;

/// Decodes every slide's image off the main loop and reports completions,
/// tagged with the deck generation they were started for. Slides whose
/// images cannot be loaded simply stay hidden.
pub async fn load_deck(deck: Vec<SlideRecord>, generation: u64, tx: Sender<AppEvent>) {
    let bleed = IMAGE_BLEED as i32;
    let width = SLIDE_WIDTH + 2 * bleed;
    let height = SLIDE_HEIGHT + 2 * bleed;

    for record in deck {
        let Some(path) = record.image.to_path() else {
            log::warn!(
                "Slide {}: remote image sources are not fetched ({})",
                record.index,
                record.image
            );
            continue;
        };

        let decoded =
            tokio::task::spawn_blocking(move || Pixbuf::from_file_at_scale(path, width, height, false))
                .await;

        match decoded {
            Ok(Ok(pixbuf)) => {
                let loaded = AppEvent::ImageLoaded {
                    index: record.index,
                    generation,
                    pixbuf,
                };
                if tx.send(loaded).await.is_err() {
                    break;
                }
            }
            Ok(Err(e)) => log::warn!("Slide {}: failed to load image: {}", record.index, e),
            Err(e) => log::warn!("Slide {}: image decode task failed: {}", record.index, e),
        }
    }
}
