use eframe::egui::{self, RichText, Ui};

use super::{card, filter_bar, page_title, query_matches};
use crate::collection::Collection;
use crate::models::{new_id, non_empty, Book, BookStatus, Section};
use crate::storage::Store;

/// Draft for the "Add Book" form.
#[derive(Debug, Default)]
struct BookDraft {
    title: String,
    author: String,
    cover: String,
    section: Section,
    status: BookStatus,
}

pub struct BookshelfPage {
    books: Collection<Book>,
    draft: BookDraft,
    filter_section: Option<Section>,
    query: String,
}

const COVER_HEIGHT: f32 = 160.0;

enum CardAction {
    SetStatus(String, BookStatus),
    Delete(String),
}

impl BookshelfPage {
    pub const ADD_INPUT: &'static str = "books.add_title";

    pub fn load(store: Store) -> Self {
        Self {
            books: Collection::load(store),
            draft: BookDraft::default(),
            filter_section: None,
            query: String::new(),
        }
    }

    pub fn books(&self) -> &[Book] {
        self.books.items()
    }

    pub fn count_with_status(&self, status: BookStatus) -> usize {
        self.books.items().iter().filter(|b| b.status == status).count()
    }

    /// Add the drafted book. The section choice carries over to the next
    /// draft; everything else resets.
    pub fn add(&mut self) -> bool {
        let Some(title) = non_empty(&self.draft.title) else {
            return false;
        };
        self.books.prepend(Book {
            id: new_id(),
            title,
            author: non_empty(&self.draft.author),
            cover: non_empty(&self.draft.cover),
            section: self.draft.section,
            status: self.draft.status,
        });
        self.draft = BookDraft { section: self.draft.section, ..BookDraft::default() };
        true
    }

    pub fn set_status(&mut self, id: &str, status: BookStatus) {
        self.books.update(id, |b| b.status = status);
    }

    pub fn delete(&mut self, id: &str) {
        self.books.remove(id);
    }

    pub fn visible(&self) -> Vec<&Book> {
        self.books
            .items()
            .iter()
            .filter(|b| self.filter_section.map_or(true, |s| b.section == s))
            .filter(|b| query_matches(&self.query, &[b.title.as_str(), b.author.as_deref().unwrap_or("")]))
            .collect()
    }

    /// Visible books grouped by reading status, in shelf order.
    pub fn shelves(&self) -> Vec<(BookStatus, Vec<&Book>)> {
        let visible = self.visible();
        BookStatus::ALL
            .iter()
            .map(|&status| (status, visible.iter().copied().filter(|b| b.status == status).collect()))
            .collect()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        page_title(ui, "Bookshelf");

        card(ui, Some("Add Book"), |ui| {
            egui::Grid::new("books.form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.title)
                        .id(egui::Id::new(Self::ADD_INPUT))
                        .hint_text("Title"),
                );
                ui.add(egui::TextEdit::singleline(&mut self.draft.author).hint_text("Author (optional)"));
                ui.end_row();

                ui.add(egui::TextEdit::singleline(&mut self.draft.cover).hint_text("Cover URL (optional)"));
                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_salt("books.section")
                        .selected_text(self.draft.section.label())
                        .show_ui(ui, |ui| {
                            for s in Section::ALL {
                                ui.selectable_value(&mut self.draft.section, s, s.label());
                            }
                        });
                    egui::ComboBox::from_id_salt("books.status")
                        .selected_text(self.draft.status.label())
                        .show_ui(ui, |ui| {
                            for s in BookStatus::ALL {
                                ui.selectable_value(&mut self.draft.status, s, s.label());
                            }
                        });
                    if ui.button("Add").clicked() {
                        self.add();
                    }
                });
                ui.end_row();
            });
        });

        ui.add_space(8.0);
        card(ui, None, |ui| {
            ui.horizontal(|ui| {
                filter_bar(ui, &mut self.filter_section, &section_options());
                ui.add_space(16.0);
                ui.add(
                    egui::TextEdit::singleline(&mut self.query)
                        .hint_text("Search by title or author...")
                        .desired_width(240.0),
                );
            });
        });

        let mut action = None;
        for (status, books) in self.shelves() {
            ui.add_space(10.0);
            ui.label(RichText::new(status.heading()).size(20.0).strong());
            ui.horizontal_wrapped(|ui| {
                for book in books {
                    book_card(ui, book, &mut action);
                }
            });
        }

        match action {
            Some(CardAction::SetStatus(id, status)) => self.set_status(&id, status),
            Some(CardAction::Delete(id)) => self.delete(&id),
            None => {}
        }
    }
}

/// Filter options: `all`, then one per section.
fn section_options() -> Vec<(Option<Section>, &'static str)> {
    let mut options = vec![(None, "all")];
    options.extend(Section::ALL.map(|s| (Some(s), s.label())));
    options
}

/// Image source for a cover, or `None` when there is nothing to load.
fn cover_source(book: &Book) -> Option<&str> {
    book.cover.as_deref().map(str::trim).filter(|url| !url.is_empty())
}

fn book_card(ui: &mut Ui, book: &Book, action: &mut Option<CardAction>) {
    egui::Frame::group(ui.style()).corner_radius(12.0).show(ui, |ui| {
        ui.set_width(200.0);
        ui.vertical(|ui| {
            match cover_source(book) {
                Some(url) => {
                    ui.add(
                        egui::Image::new(url)
                            .max_width(200.0)
                            .max_height(COVER_HEIGHT)
                            .corner_radius(8.0),
                    );
                }
                None => {
                    ui.label(RichText::new("No cover").weak());
                }
            }
            ui.label(RichText::new(&book.title).strong());
            if let Some(author) = &book.author {
                ui.label(RichText::new(format!("by {}", author)).small());
            }
            ui.label(RichText::new(book.section.label()).small().weak());
            ui.horizontal(|ui| {
                let mut status = book.status;
                egui::ComboBox::from_id_salt(("books.card_status", &book.id))
                    .selected_text(status.label())
                    .width(100.0)
                    .show_ui(ui, |ui| {
                        for s in BookStatus::ALL {
                            ui.selectable_value(&mut status, s, s.label());
                        }
                    });
                if status != book.status {
                    *action = Some(CardAction::SetStatus(book.id.clone(), status));
                }
                if ui.small_button("Delete").clicked() {
                    *action = Some(CardAction::Delete(book.id.clone()));
                }
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KEY_BOOKS;

    fn add_book(page: &mut BookshelfPage, title: &str, author: &str, section: Section, status: BookStatus) {
        page.draft.title = title.into();
        page.draft.author = author.into();
        page.draft.section = section;
        page.draft.status = status;
        assert!(page.add());
    }

    fn titles(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn add_drops_blank_optionals_and_resets_draft() {
        let mut page = BookshelfPage::load(Store::memory());
        page.draft = BookDraft {
            title: " Thinking, Fast and Slow ".into(),
            author: "  ".into(),
            cover: " https://example.com/c.jpg ".into(),
            section: Section::Science,
            status: BookStatus::Reading,
        };
        assert!(page.add());

        let book = &page.books()[0];
        assert_eq!(book.title, "Thinking, Fast and Slow");
        assert_eq!(book.author, None);
        assert_eq!(book.cover.as_deref(), Some("https://example.com/c.jpg"));
        assert_eq!(book.status, BookStatus::Reading);

        assert_eq!(page.draft.title, "");
        assert_eq!(page.draft.cover, "");
        assert_eq!(page.draft.status, BookStatus::ToRead);
        assert_eq!(page.draft.section, Section::Science);
    }

    #[test]
    fn missing_title_is_ignored() {
        let mut page = BookshelfPage::load(Store::memory());
        page.draft.author = "Someone".into();
        assert!(!page.add());
        assert!(page.books().is_empty());
    }

    #[test]
    fn section_filter_and_author_search() {
        let mut page = BookshelfPage::load(Store::memory());
        add_book(&mut page, "Deep Learning", "Goodfellow", Section::AiMl, BookStatus::ToRead);
        add_book(&mut page, "Cosmos", "Sagan", Section::Science, BookStatus::Finished);
        add_book(&mut page, "Atomic Habits", "Clear", Section::SelfHelp, BookStatus::Reading);

        page.filter_section = Some(Section::Science);
        assert_eq!(titles(&page.visible()), ["Cosmos"]);

        page.filter_section = None;
        page.query = "sag".into();
        assert_eq!(titles(&page.visible()), ["Cosmos"]);
        page.query = "learn".into();
        assert_eq!(titles(&page.visible()), ["Deep Learning"]);
    }

    #[test]
    fn shelves_group_in_status_order() {
        let mut page = BookshelfPage::load(Store::memory());
        add_book(&mut page, "A", "", Section::Exec, BookStatus::Finished);
        add_book(&mut page, "B", "", Section::Exec, BookStatus::ToRead);
        add_book(&mut page, "C", "", Section::Exec, BookStatus::Finished);

        let shelves = page.shelves();
        let order: Vec<BookStatus> = shelves.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, BookStatus::ALL);
        assert_eq!(titles(&shelves[0].1), ["B"]);
        assert!(shelves[1].1.is_empty());
        assert_eq!(titles(&shelves[2].1), ["C", "A"]);
    }

    #[yare::parameterized(
        absent  = { None,                            None },
        blank   = { Some("   "),                     None },
        url     = { Some("https://example.com/c.jpg"), Some("https://example.com/c.jpg") },
        padded  = { Some(" https://example.com/c.jpg "), Some("https://example.com/c.jpg") },
    )]
    fn cover_image_source(cover: Option<&str>, expected: Option<&str>) {
        let book = Book {
            id: "b".into(),
            title: "T".into(),
            author: None,
            cover: cover.map(String::from),
            section: Section::default(),
            status: BookStatus::default(),
        };
        assert_eq!(cover_source(&book), expected);
    }

    #[test]
    fn section_filter_options_start_with_all() {
        let options = section_options();
        assert_eq!(options[0], (None, "all"));
        assert_eq!(options.len(), Section::ALL.len() + 1);
        assert!(options[1..].iter().zip(Section::ALL).all(|((v, l), s)| *v == Some(s) && *l == s.label()));
    }

    #[test]
    fn status_change_and_delete_persist() {
        let store = Store::memory();
        let mut page = BookshelfPage::load(store.clone());
        add_book(&mut page, "Dune", "Herbert", Section::Science, BookStatus::ToRead);
        let id = page.books()[0].id.clone();

        page.set_status(&id, BookStatus::Finished);
        let reloaded = BookshelfPage::load(store.clone());
        assert_eq!(reloaded.books()[0].status, BookStatus::Finished);
        assert_eq!(reloaded.count_with_status(BookStatus::Finished), 1);

        page.delete(&id);
        assert_eq!(store.get_raw(KEY_BOOKS).as_deref(), Some("[]"));
    }
}
