//! Cross-collection unique URL slug generation.
//!
//! A listing's `urlEnd` doubles as its public route identifier, so no two
//! listings may share a slug regardless of kind. The generator here is a
//! generate-and-test loop: sanitize the desired slug, probe every collection
//! for a collision, and suffix until a free candidate is found.
//!
//! There is no locking between the probe and the eventual insert. Two
//! concurrent creations with the same desired slug can both pass the check;
//! the per-table unique index in [`crate::db`] turns that race into a
//! database error instead of a silent duplicate.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;

/// Maximum slug length after sanitization, before any uniqueness suffix.
pub const MAX_SLUG_LEN: usize = 64;

/// Stem used when sanitization leaves nothing usable.
const FALLBACK_STEM: &str = "listing";

/// Counter suffixes tried (`-2` .. `-25`) before switching to random tokens.
const COUNTER_ATTEMPTS: u32 = 25;

/// Minimal store capability the generator needs: can a collection tell
/// whether a slug is already taken? One probe per collection keeps the
/// generator polymorphic over the store.
#[async_trait]
pub trait SlugProbe: Send + Sync {
    async fn slug_exists(&self, slug: &str) -> AppResult<bool>;
}

/// Normalizes a desired slug: ASCII lowercase, runs of anything else collapse
/// to a single `-`, trimmed and truncated. Empty input falls back to a fixed
/// stem so the generator always has something to suffix.
pub fn sanitize(desired: &str) -> String {
    let mut out = String::with_capacity(desired.len().min(MAX_SLUG_LEN));
    let mut pending_dash = false;
    for c in desired.chars() {
        if out.len() >= MAX_SLUG_LEN {
            break;
        }
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            if out.len() < MAX_SLUG_LEN {
                out.push(c);
            }
        } else {
            pending_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        out
    }
}

async fn taken(candidate: &str, probes: &[&dyn SlugProbe]) -> AppResult<bool> {
    // Sequential checks, one collection after the other.
    for probe in probes {
        if probe.slug_exists(candidate).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Produces a slug unique across every probed collection at the moment of
/// assignment.
///
/// The sanitized candidate is returned unchanged when no collection holds it.
/// On collision a counter suffix is appended and all collections are probed
/// again; after [`COUNTER_ATTEMPTS`] the suffix switches to a random token so
/// the loop terminates even when a whole counter range is occupied.
pub async fn generate_unique_url_end(desired: &str, probes: &[&dyn SlugProbe]) -> AppResult<String> {
    let base = sanitize(desired);
    if !taken(&base, probes).await? {
        return Ok(base);
    }

    for n in 2..=COUNTER_ATTEMPTS {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate, probes).await? {
            return Ok(candidate);
        }
    }

    loop {
        let token = Uuid::new_v4().simple().to_string();
        let candidate = format!("{}-{}", base, &token[..8]);
        if !taken(&candidate, probes).await? {
            return Ok(candidate);
        }
    }
}
