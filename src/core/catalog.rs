use crate::core::service::LibraryService;
use crate::domain::model::{Book, NewBook};
use crate::domain::ports::LibraryStore;
use crate::utils::error::{LibraryError, Result};

impl<S: LibraryStore> LibraryService<S> {
    /// Adds a new title to the catalog with all copies available.
    pub async fn add_book_to_catalog(
        &self,
        title: &str,
        author: &str,
        isbn: &str,
        total_copies: u32,
    ) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(LibraryError::validation("Title is required."));
        }
        if title.chars().count() > 200 {
            return Err(LibraryError::validation(
                "Title must be less than 200 characters.",
            ));
        }

        let author = author.trim();
        if author.is_empty() {
            return Err(LibraryError::validation("Author is required."));
        }
        if author.chars().count() > 100 {
            return Err(LibraryError::validation(
                "Author must be less than 100 characters.",
            ));
        }

        if isbn.chars().count() != 13 {
            return Err(LibraryError::validation("ISBN must be exactly 13 digits."));
        }

        if total_copies == 0 {
            return Err(LibraryError::validation(
                "Total copies must be a positive integer.",
            ));
        }

        if self.store.book_by_isbn(isbn).await?.is_some() {
            return Err(LibraryError::DuplicateIsbn);
        }

        let book_id = self
            .store
            .insert_book(NewBook {
                title: title.to_string(),
                author: author.to_string(),
                isbn: isbn.to_string(),
                total_copies,
                available_copies: total_copies,
            })
            .await
            .map_err(|e| {
                LibraryError::persistence("Database error occurred while adding the book.", e)
            })?;

        tracing::info!(book_id, isbn, "book added to catalog");
        Ok(format!(
            "Book \"{}\" has been successfully added to the catalog.",
            title
        ))
    }

    /// Searches the catalog. Title and author searches are case-insensitive
    /// substring matches; isbn is an exact lookup. Unknown search types
    /// yield an empty list.
    pub async fn search_books_in_catalog(
        &self,
        search_term: &str,
        search_type: &str,
    ) -> Result<Vec<Book>> {
        let results = match search_type {
            "title" => {
                let needle = search_term.to_lowercase();
                self.store
                    .all_books()
                    .await?
                    .into_iter()
                    .filter(|b| b.title.to_lowercase().contains(&needle))
                    .collect()
            }
            "author" => {
                let needle = search_term.to_lowercase();
                self.store
                    .all_books()
                    .await?
                    .into_iter()
                    .filter(|b| b.author.to_lowercase().contains(&needle))
                    .collect()
            }
            "isbn" => self
                .store
                .book_by_isbn(search_term)
                .await?
                .into_iter()
                .collect(),
            other => {
                tracing::debug!(search_type = other, "unknown search type");
                Vec::new()
            }
        };

        tracing::debug!(search_type, hits = results.len(), "catalog search");
        Ok(results)
    }
}
