//! Logo asset resolution and the single-slot profile cache.

use tokio::sync::RwLock;

use crate::{Error, Result};

/// Resolved logo asset: reference key, intrinsic dimensions, and the
/// raw vector markup to embed.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoProfile {
    key: String,
    pub intrinsic_width: f64,
    pub intrinsic_height: f64,
    pub markup: String,
}

impl LogoProfile {
    /// Parse markup into a profile, probing the intrinsic size.
    ///
    /// Any XML prolog or doctype ahead of the root element is stripped
    /// so the markup can be nested inside another document later.
    pub fn from_markup(reference: &str, markup: String) -> Result<Self> {
        let start = markup
            .find("<svg")
            .ok_or_else(|| Error::InvalidAssetFormat(reference.to_string()))?;
        let markup = markup[start..].to_string();

        let tree = usvg::Tree::from_str(&markup, &usvg::Options::default())
            .map_err(|_| Error::InvalidAssetFormat(reference.to_string()))?;
        let size = tree.size();

        Ok(Self {
            key: reference.to_string(),
            intrinsic_width: size.width() as f64,
            intrinsic_height: size.height() as f64,
            markup,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.intrinsic_width / self.intrinsic_height
    }
}

/// Asynchronous logo asset fetcher. Implementations own the actual I/O
/// mechanism; the engine only sees markup text.
#[allow(async_fn_in_trait)]
pub trait LogoLoader {
    async fn load(&self, reference: &str) -> Result<String>;
}

/// Loads logo markup from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLogoLoader;

impl LogoLoader for FsLogoLoader {
    async fn load(&self, reference: &str) -> Result<String> {
        tokio::fs::read_to_string(reference)
            .await
            .map_err(|e| Error::AssetLoad {
                reference: reference.to_string(),
                message: e.to_string(),
            })
    }
}

/// Resolves logo references to profiles through a single-slot cache.
///
/// The slot only holds fully resolved profiles: it is written after a
/// successful load and parse, never with partial state. Concurrent
/// renders may observe a stale profile while a swap is in flight, which
/// is acceptable; they never observe a torn one.
pub struct LogoResolver<L> {
    loader: L,
    slot: RwLock<Option<LogoProfile>>,
}

impl<L: LogoLoader> LogoResolver<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            slot: RwLock::new(None),
        }
    }

    /// Resolve a reference to a profile.
    ///
    /// No reference discards any cached profile and yields `None`. A
    /// reference matching the cached key is served without I/O; anything
    /// else is fetched, parsed, and cached.
    pub async fn resolve(&self, reference: Option<&str>) -> Result<Option<LogoProfile>> {
        let Some(reference) = reference else {
            *self.slot.write().await = None;
            return Ok(None);
        };

        if !reference.to_ascii_lowercase().ends_with(".svg") {
            return Err(Error::InvalidAssetFormat(reference.to_string()));
        }

        if let Some(profile) = self.slot.read().await.as_ref() {
            if profile.key() == reference {
                tracing::debug!(reference, "logo profile cache hit");
                return Ok(Some(profile.clone()));
            }
        }

        tracing::debug!(reference, "fetching logo asset");
        let markup = self.loader.load(reference).await?;
        let profile = LogoProfile::from_markup(reference, markup)?;
        *self.slot.write().await = Some(profile.clone());
        Ok(Some(profile))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const WIDE_LOGO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><rect width="100" height="50" fill="red"/></svg>"#;

    struct CountingLoader {
        fetches: AtomicUsize,
        markup: &'static str,
    }

    impl CountingLoader {
        fn new(markup: &'static str) -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                markup,
            }
        }
    }

    impl LogoLoader for &CountingLoader {
        async fn load(&self, _reference: &str) -> Result<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.markup.to_string())
        }
    }

    #[tokio::test]
    async fn repeated_reference_fetches_once() {
        let loader = CountingLoader::new(WIDE_LOGO);
        let resolver = LogoResolver::new(&loader);

        let first = resolver.resolve(Some("logo.svg")).await.unwrap().unwrap();
        let second = resolver.resolve(Some("logo.svg")).await.unwrap().unwrap();

        assert_eq!(loader.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert_eq!(first.aspect_ratio(), 2.0);
    }

    #[tokio::test]
    async fn changed_reference_refetches() {
        let loader = CountingLoader::new(WIDE_LOGO);
        let resolver = LogoResolver::new(&loader);

        resolver.resolve(Some("a.svg")).await.unwrap();
        let swapped = resolver.resolve(Some("b.svg")).await.unwrap().unwrap();

        assert_eq!(loader.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(swapped.key(), "b.svg");
    }

    #[tokio::test]
    async fn no_reference_discards_cache() {
        let loader = CountingLoader::new(WIDE_LOGO);
        let resolver = LogoResolver::new(&loader);

        resolver.resolve(Some("logo.svg")).await.unwrap();
        assert!(resolver.resolve(None).await.unwrap().is_none());

        // Cache was dropped, so the same reference fetches again.
        resolver.resolve(Some("logo.svg")).await.unwrap();
        assert_eq!(loader.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn non_vector_reference_rejected_before_io() {
        let loader = CountingLoader::new(WIDE_LOGO);
        let resolver = LogoResolver::new(&loader);

        let err = resolver.resolve(Some("logo.png")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidAssetFormat(_)));
        assert_eq!(loader.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn malformed_markup_rejected_and_not_cached() {
        let loader = CountingLoader::new("not really svg at all");
        let resolver = LogoResolver::new(&loader);

        let err = resolver.resolve(Some("broken.svg")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidAssetFormat(_)));

        // Failure must not populate the slot.
        let err = resolver.resolve(Some("broken.svg")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidAssetFormat(_)));
        assert_eq!(loader.fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn prolog_is_stripped() {
        let profile = LogoProfile::from_markup("logo.svg", WIDE_LOGO.to_string()).unwrap();
        assert!(profile.markup.starts_with("<svg"));
        assert_eq!(profile.intrinsic_width, 100.0);
        assert_eq!(profile.intrinsic_height, 50.0);
    }
}
