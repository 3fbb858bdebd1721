use qa_harness::{text_within, BrowserSession, By, Error, Mismatch};
use tracing::info;

pub const SEASONAL_LINK: &str = "Seasonal";
pub const RECIPE_CARDS: &str = "div.recipe-card.single-recipe.visible";
pub const CARD_TITLE: &str = "card-title";
pub const IMAGE_OVERLAY: &str = "image-overlay";
pub const PRIMARY_INFO: &str = "primary-info-text";
pub const RECIPE_INDEX: usize = 2;

/// Picks the third recipe card, failing with a readable message when the listing is short.
pub fn third_card<T>(cards: Vec<T>) -> Result<T, Error> {
    cards.into_iter().nth(RECIPE_INDEX).ok_or_else(|| {
        Error::PreconditionFailed(String::from(
            "There was not three recipes under Seasonal.",
        ))
    })
}

/// The third Seasonal recipe's title as listed, and the `h1` of the page its image opens.
pub async fn third_seasonal_recipe_titles(
    browser: &BrowserSession,
) -> Result<(String, String), Error> {
    browser.open_start_page().await?;
    browser.click_link(SEASONAL_LINK).await?;

    let card = third_card(browser.find_all(By::Css(RECIPE_CARDS)).await?)?;
    let listed_title = text_within(&card, By::ClassName(CARD_TITLE)).await?;

    card.find(By::ClassName(IMAGE_OVERLAY)).await?.click().await?;

    let primary_info = browser.find(By::ClassName(PRIMARY_INFO)).await?;
    let page_title = text_within(&primary_info, By::Css("h1")).await?;

    Ok((listed_title, page_title))
}

pub async fn check_third_seasonal_recipe(browser: &BrowserSession) -> Result<(), Error> {
    let (listed_title, page_title) = third_seasonal_recipe_titles(browser).await?;
    info!(%listed_title, %page_title, "compared recipe titles");

    titles_match(&listed_title, &page_title)
}

/// Titles have to be exactly equal; case and whitespace differences count.
pub fn titles_match(listed_title: &str, page_title: &str) -> Result<(), Error> {
    if listed_title == page_title {
        Ok(())
    } else {
        Err(Error::ExpectationFailed(vec![Mismatch {
            subject: String::from("recipe page title"),
            expected: format!("{:?}", listed_title),
            actual: format!("{:?}", page_title),
        }]))
    }
}
