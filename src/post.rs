//! The post record.
//!
//! A [`Post`] owns a normalized [`PHOTO_SIZE`]-square photo plus caption,
//! date, like count and retweet count. Construction validates its inputs;
//! after that every accessor and mutator is total.
//!
//! ```no_run
//! use photo_post::{Post, RustBackend};
//!
//! let mut post = Post::new(&RustBackend::new(), "gumball/flowers.png", "Gumball :D", "2024-05-07", 250, 40)?;
//! post.like();
//! println!("{post}");
//! # Ok::<(), photo_post::PostError>(())
//! ```
//!
//! ## Invariants
//!
//! - Retweets are non-negative at construction. Nothing re-checks afterwards.
//! - Likes have no floor; [`Post::dislike`] may push them below zero.
//! - The photo is 17×17 after construction. [`Post::update_photo`] trusts the
//!   caller and stores whatever grid it is given.
//! - The filename is provenance only. It is not part of equality and is not
//!   touched by [`Post::update_photo`].

use crate::config::{ConfigError, EngagementConfig};
use crate::imaging::{ImageSource, NormalizeError, PHOTO_SIZE, PixelGrid, SourceError, normalize};
use crate::render::render_photo;
use log::{debug, warn};
use rand::Rng;
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostError {
    #[error("Retweets are less than zero: {0}")]
    NegativeRetweets(i32),
    #[error(
        "Photo must be at least {} pixels in each dimension, got {width}x{height}",
        PHOTO_SIZE
    )]
    PhotoTooSmall { width: usize, height: usize },
    #[error("Could not load photo: {0}")]
    Source(#[from] SourceError),
    #[error("Invalid engagement ranges: {0}")]
    Engagement(#[from] ConfigError),
}

impl From<NormalizeError> for PostError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::TooSmall { width, height } => Self::PhotoTooSmall { width, height },
        }
    }
}

/// A social-media post with a photo.
#[derive(Debug, Clone)]
pub struct Post {
    photo: PixelGrid,
    filename: String,
    caption: String,
    date: String,
    likes: i32,
    retweets: i32,
}

/// Posts and tweets are the same record.
pub type Tweet = Post;

impl Post {
    /// Load the photo at `path` through `source` and build a post.
    ///
    /// # Errors
    /// - [`PostError::NegativeRetweets`] if `retweets < 0` (checked before loading)
    /// - [`PostError::Source`] if the photo cannot be loaded
    /// - [`PostError::PhotoTooSmall`] if either photo dimension is below [`PHOTO_SIZE`]
    pub fn new(
        source: &impl ImageSource,
        path: impl AsRef<Path>,
        caption: impl Into<String>,
        date: impl Into<String>,
        likes: i32,
        retweets: i32,
    ) -> Result<Self, PostError> {
        if retweets < 0 {
            return Err(PostError::NegativeRetweets(retweets));
        }
        let path = path.as_ref();
        let pixels = source.load(path)?;
        Self::from_grid(
            path.to_string_lossy(),
            &pixels,
            caption,
            date,
            likes,
            retweets,
        )
    }

    /// Build a post from an already loaded photo.
    ///
    /// `filename` is recorded as-is. Same validation as [`Post::new`].
    pub fn from_grid(
        filename: impl Into<String>,
        pixels: &PixelGrid,
        caption: impl Into<String>,
        date: impl Into<String>,
        likes: i32,
        retweets: i32,
    ) -> Result<Self, PostError> {
        if retweets < 0 {
            return Err(PostError::NegativeRetweets(retweets));
        }
        let photo = normalize(pixels)?;
        let post = Self {
            photo,
            filename: filename.into(),
            caption: caption.into(),
            date: date.into(),
            likes,
            retweets,
        };
        debug!(
            "created post from {} ({} likes, {} retweets)",
            post.filename, post.likes, post.retweets
        );
        Ok(post)
    }

    /// Build a post with random likes and retweets drawn from the stock
    /// [`EngagementConfig`] ranges.
    pub fn with_random_engagement(
        source: &impl ImageSource,
        path: impl AsRef<Path>,
        caption: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self, PostError> {
        Self::with_engagement(
            source,
            path,
            caption,
            date,
            &EngagementConfig::default(),
            &mut rand::thread_rng(),
        )
    }

    /// Build a post with likes and retweets drawn from `engagement` using `rng`.
    ///
    /// # Errors
    /// [`PostError::Engagement`] if `engagement` fails
    /// [`EngagementConfig::validate`], plus everything [`Post::new`] reports.
    pub fn with_engagement(
        source: &impl ImageSource,
        path: impl AsRef<Path>,
        caption: impl Into<String>,
        date: impl Into<String>,
        engagement: &EngagementConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, PostError> {
        engagement.validate()?;
        let likes = rng.gen_range(engagement.likes_range());
        let retweets = rng.gen_range(engagement.retweets_range());
        Self::new(source, path, caption, date, likes, retweets)
    }

    /// Terminal rendering of the photo.
    pub fn photo_string(&self) -> String {
        render_photo(&self.photo)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn photo_pixels(&self) -> &PixelGrid {
        &self.photo
    }

    /// Replace the photo. The filename is left as it was and the grid is
    /// stored without normalization.
    pub fn update_photo(&mut self, pixels: PixelGrid) {
        if pixels.width() != PHOTO_SIZE || pixels.height() != PHOTO_SIZE {
            warn!(
                "post {} given a {}x{} photo, expected {PHOTO_SIZE}x{PHOTO_SIZE}",
                self.filename,
                pixels.width(),
                pixels.height()
            );
        }
        self.photo = pixels;
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn update_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn likes(&self) -> i32 {
        self.likes
    }

    pub fn retweets(&self) -> i32 {
        self.retweets
    }

    // Counters wrap at the i32 bounds instead of panicking.
    pub fn like(&mut self) {
        self.likes = self.likes.wrapping_add(1);
    }

    pub fn dislike(&mut self) {
        self.likes = self.likes.wrapping_sub(1);
    }

    pub fn retweet(&mut self) {
        self.retweets = self.retweets.wrapping_add(1);
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.date)?;
        writeln!(f, "{}", self.caption)?;
        f.write_str(&render_photo(&self.photo))?;
        write!(f, "Likes: {}  |  Retweets: {}", self.likes, self.retweets)
    }
}

// Filename is not compared.
impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.photo == other.photo
            && self.caption == other.caption
            && self.date == other.date
            && self.likes == other.likes
            && self.retweets == other.retweets
    }
}

impl Eq for Post {}
