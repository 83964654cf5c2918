use serde::{Deserialize, Deserializer, Serialize};

/// Envelope shared by the search endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResponse<T> {
	#[serde(default)]
	pub total: u64,
	#[serde(default)]
	pub total_pages: u64,
	pub results: Vec<T>,
}

/// A single photo returned by `GET /search/photos`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Photo {
	#[serde(deserialize_with = "string_or_number")]
	pub id: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub alt_description: Option<String>,
	pub urls: PhotoUrls,
	pub user: PhotoUser,
	#[serde(default)]
	pub links: PhotoLinks,
}

impl Photo {
	/// URL of the thumbnail rendered in the result grid.
	#[must_use]
	pub fn thumbnail_url(&self) -> &str {
		&self.urls.small
	}

	/// Photographer display name.
	#[must_use]
	pub fn owner_name(&self) -> &str {
		&self.user.name
	}

	/// Avatar URL of the photographer.
	#[must_use]
	pub fn avatar_url(&self) -> &str {
		&self.user.profile_image.small
	}

	/// Best available caption, falling back to the description.
	#[must_use]
	pub fn caption(&self) -> Option<&str> {
		self.alt_description
			.as_deref()
			.or(self.description.as_deref())
			.filter(|text| !text.trim().is_empty())
	}

	/// Link printed when a photo is picked: the photo page if known, else the thumbnail.
	#[must_use]
	pub fn share_url(&self) -> &str {
		self.links.html.as_deref().unwrap_or(&self.urls.small)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhotoUrls {
	pub small: String,
	#[serde(default)]
	pub regular: Option<String>,
	#[serde(default)]
	pub thumb: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhotoUser {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub profile_image: ProfileImage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileImage {
	#[serde(default)]
	pub small: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhotoLinks {
	#[serde(default)]
	pub html: Option<String>,
}

/// A collection returned by `GET /search/collections`, used as a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Collection {
	#[serde(deserialize_with = "string_or_number")]
	pub id: String,
	#[serde(default)]
	pub title: String,
}

impl Collection {
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
		}
	}
}

/// Older API revisions return numeric ids.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Id {
		Text(String),
		Number(u64),
	}

	Ok(match Id::deserialize(deserializer)? {
		Id::Text(text) => text,
		Id::Number(number) => number.to_string(),
	})
}
