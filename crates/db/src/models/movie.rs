use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_core::validation::{validate_release_date, validate_required};
use serde::{Deserialize, Serialize};

/// A document in the `movies` index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(
        default,
        rename = "recommended_by",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommended_by: Option<String>,
}

/// DTO for creating a movie. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: String,
    pub director: Option<String>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub rating: Option<f64>,
    #[serde(rename = "recommended_by")]
    pub recommended_by: Option<String>,
}

impl CreateMovie {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required("title", &self.title)?;
        if let Some(date) = &self.release_date {
            validate_release_date(date)?;
        }
        Ok(())
    }

    /// Build the stored document under a server-assigned id.
    pub fn into_movie(self, id: DbId) -> Movie {
        Movie {
            id,
            title: self.title,
            director: self.director,
            release_date: self.release_date,
            genre: self.genre,
            description: self.description,
            tags: self.tags,
            rating: self.rating,
            recommended_by: self.recommended_by,
        }
    }
}

/// DTO for updating a movie. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub director: Option<String>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub rating: Option<f64>,
    #[serde(rename = "recommended_by")]
    pub recommended_by: Option<String>,
}

impl UpdateMovie {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(title) = &self.title {
            validate_required("title", title)?;
        }
        if let Some(date) = &self.release_date {
            validate_release_date(date)?;
        }
        Ok(())
    }
}

impl Movie {
    /// Merge an update onto this movie. The id never changes.
    pub fn apply(&mut self, update: UpdateMovie) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(director) = update.director {
            self.director = Some(director);
        }
        if let Some(release_date) = update.release_date {
            self.release_date = Some(release_date);
        }
        if let Some(genre) = update.genre {
            self.genre = Some(genre);
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(rating) = update.rating {
            self.rating = Some(rating);
        }
        if let Some(recommended_by) = update.recommended_by {
            self.recommended_by = Some(recommended_by);
        }
    }
}

/// Query string for `GET /movies/search/title`.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleSearchParams {
    pub title: Option<String>,
}

/// Query string for `GET /movies/search/director`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorSearchParams {
    pub director: Option<String>,
}
