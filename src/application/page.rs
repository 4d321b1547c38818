// src/application/page.rs
//
// What a handler hands back: which template, with what data
//
// Turning a page into markup is not this crate's job. A `Renderer`
// decides that; `JsonRenderer` is the bundled one.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::services::FlashMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Template {
    Home,
    Venues,
    SearchVenues,
    ShowVenue,
    NewVenue,
    EditVenue,
    DeleteVenue,
    Artists,
    SearchArtists,
    ShowArtist,
    NewArtist,
    EditArtist,
    Shows,
    NewShow,
    NotFound,
    ServerError,
}

impl Template {
    pub fn path(self) -> &'static str {
        match self {
            Template::Home => "pages/home.html",
            Template::Venues => "pages/venues.html",
            Template::SearchVenues => "pages/search_venues.html",
            Template::ShowVenue => "pages/show_venue.html",
            Template::NewVenue => "forms/new_venue.html",
            Template::EditVenue => "forms/edit_venue.html",
            Template::DeleteVenue => "pages/delete_venue.html",
            Template::Artists => "pages/artists.html",
            Template::SearchArtists => "pages/search_artists.html",
            Template::ShowArtist => "pages/show_artist.html",
            Template::NewArtist => "forms/new_artist.html",
            Template::EditArtist => "forms/edit_artist.html",
            Template::Shows => "pages/shows.html",
            Template::NewShow => "forms/new_show.html",
            Template::NotFound => "errors/404.html",
            Template::ServerError => "errors/500.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub template: Template,
    pub status: u16,
    pub flash: Option<FlashMessage>,
    pub context: Value,
}

impl Page {
    pub fn new(template: Template, context: impl Serialize) -> AppResult<Self> {
        Ok(Self {
            template,
            status: 200,
            flash: None,
            context: serde_json::to_value(context)?,
        })
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_flash(mut self, flash: FlashMessage) -> Self {
        self.flash = Some(flash);
        self
    }
}

pub trait Renderer: Send + Sync {
    fn content_type(&self) -> &'static str;
    fn render(&self, page: &Page) -> AppResult<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, page: &Page) -> AppResult<String> {
        let body = json!({
            "template": page.template.path(),
            "status": page.status,
            "flash": page.flash,
            "context": page.context,
        });
        Ok(serde_json::to_string(&body)?)
    }
}
