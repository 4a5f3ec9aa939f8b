pub mod components;
pub mod logging;
pub mod navigation;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link, Meta, Title};
use pages::info::InfoPage;
use pipeguide_core::PageConfig;

const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@400;500;700;800&display=swap";

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="도시가스 배관보호 안내" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Link rel="stylesheet" href=FONT_STYLESHEET />
        <InfoPage config=config />
    }
}
