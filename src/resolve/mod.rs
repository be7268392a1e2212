//! Configuration resolution: the layered override pipeline.
//!
//! [`SiteResolver`] merges the configuration sources in strict priority
//! order (local presets, KV exact hostname, KV sentinel default, env
//! blob, built-in record), applies scalar environment overrides from the
//! fixed field table, computes derived fields, and hands back one
//! immutable [`SiteConfig`]. Resolution never fails: the worst case is
//! the built-in default record.

mod fields;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::record::DEFAULT_ACCENT;
use crate::domain::{HostKey, NamedPreset, PageMode, RawSiteRecord, SiteConfig, derive_fields};
use crate::source::{EnvTable, KvStore, PresetStore, defaults, kv};

/// Outcome of one resolution: the page config plus, in dev mode, the
/// alternate presets feeding the shell's switcher.
#[derive(Debug, Clone)]
pub struct ResolvedSite {
    /// The fully merged, immutable configuration.
    pub config: SiteConfig,
    /// All local presets, present only for development hostnames.
    pub presets: Option<Vec<NamedPreset>>,
    /// Index of the preset the config was built from.
    pub active_preset: usize,
}

/// Per-request configuration resolver.
#[derive(Debug)]
pub struct SiteResolver {
    presets: PresetStore,
    kv: Option<Arc<dyn KvStore>>,
}

impl SiteResolver {
    /// Creates a resolver. `kv` is `None` when no store is configured;
    /// the chain then skips straight to the environment blob.
    #[must_use]
    pub fn new(presets: PresetStore, kv: Option<Arc<dyn KvStore>>) -> Self {
        Self { presets, kv }
    }

    /// Resolves the configuration for one request.
    ///
    /// `preset_index` is the dev switcher's selection; it only applies
    /// when the local preset store is active and the index is in range.
    /// The evaluation instant is explicit so resolution is deterministic.
    pub async fn resolve(
        &self,
        host: &HostKey,
        env: &EnvTable,
        preset_index: Option<usize>,
        now: DateTime<Utc>,
    ) -> ResolvedSite {
        let presets = if self.presets.applies_to(host) {
            self.presets.load().await
        } else {
            None
        };

        let mut active_preset = 0;
        let mut raw = match &presets {
            Some(list) => {
                active_preset = preset_index.filter(|i| *i < list.len()).unwrap_or(0);
                list.get(active_preset)
                    .map(|p| p.config.clone())
                    .unwrap_or_default()
            }
            None => self.stored_record(host, env).await,
        };

        fields::apply_env_overrides(&mut raw, host, env);

        ResolvedSite {
            config: finalize(raw, host, now),
            presets,
            active_preset,
        }
    }

    /// Consults the non-preset sources in priority order.
    async fn stored_record(&self, host: &HostKey, env: &EnvTable) -> RawSiteRecord {
        if let Some(store) = &self.kv {
            if let Some(record) = kv::lookup(store.as_ref(), host.canonical()).await {
                return record;
            }
            if let Some(record) = kv::lookup(store.as_ref(), kv::DEFAULT_KEY).await {
                return record;
            }
        }
        if let Some(record) = env.config_blob(host) {
            return record;
        }
        defaults::default_record(host)
    }
}

/// Fills defaults and computes derived fields, producing the immutable
/// record consumed by the renderers.
///
/// Pre-supplied derived values win over recomputation, even when a
/// `registrationDate` is also present.
fn finalize(raw: RawSiteRecord, host: &HostKey, now: DateTime<Utc>) -> SiteConfig {
    let domain = raw.domain.unwrap_or_else(|| host.canonical().to_string());
    let domain_title = raw.domain_title.unwrap_or_else(|| domain.clone());
    let mode = raw.mode.as_deref().map_or(PageMode::Parking, PageMode::parse);

    let derived = derive_fields(&domain_title, raw.registration_date.as_deref(), now);

    SiteConfig {
        domain,
        domain_title,
        mode,
        title: raw.title,
        description: raw.description,
        tagline: raw.tagline,
        subtitle: raw.subtitle,
        registration_date: raw.registration_date,
        domain_age_years: raw.domain_age_years.unwrap_or(derived.domain_age_years),
        domain_registration: raw
            .domain_registration
            .unwrap_or(derived.domain_registration),
        domain_extension: raw.domain_extension.unwrap_or(derived.domain_extension),
        sale_price: raw.sale_price,
        contact_email: raw.contact_email,
        launch_date: raw.launch_date,
        features: raw.features.unwrap_or_default(),
        links: raw.links.unwrap_or_default(),
        social_links: raw.social_links.unwrap_or_default(),
        accent_color: raw.accent_color.unwrap_or_else(|| DEFAULT_ACCENT.to_string()),
        footer_text: raw.footer_text,
        show_credit: raw.show_credit.unwrap_or(true),
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::MemoryKvStore;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0) {
            chrono::LocalResult::Single(dt) => dt,
            _ => panic!("valid test instant"),
        }
    }

    fn no_presets() -> PresetStore {
        PresetStore::new(
            "/nonexistent/vitrine-presets.json",
            vec!["localhost".to_string()],
        )
    }

    fn resolver_with(store: MemoryKvStore) -> SiteResolver {
        SiteResolver::new(no_presets(), Some(Arc::new(store)))
    }

    fn preset_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path =
            std::env::temp_dir().join(format!("vitrine-resolve-{name}-{}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn unknown_host_gets_safe_defaults() {
        let resolver = SiteResolver::new(no_presets(), None);
        let host = HostKey::new("unknown.example");

        let site = resolver
            .resolve(&host, &EnvTable::default(), None, now())
            .await;

        assert_eq!(site.config.mode, PageMode::Parking);
        assert_eq!(site.config.accent_color, DEFAULT_ACCENT);
        assert_eq!(site.config.domain, "unknown.example");
        assert_eq!(site.config.domain_title, "unknown.example");
        assert!(site.config.sale_price.is_none());
        assert!(site.presets.is_none());
    }

    #[tokio::test]
    async fn exact_kv_entry_beats_sentinel_default() {
        let mut store = MemoryKvStore::new();
        store.insert("cdn-farm.io", json!({"title": "Exact"}));
        store.insert(kv::DEFAULT_KEY, json!({"title": "Sentinel"}));

        let site = resolver_with(store)
            .resolve(&HostKey::new("cdn-farm.io"), &EnvTable::default(), None, now())
            .await;

        assert_eq!(site.config.title.as_deref(), Some("Exact"));
    }

    #[tokio::test]
    async fn sentinel_default_is_consulted_on_exact_miss() {
        let mut store = MemoryKvStore::new();
        store.insert(kv::DEFAULT_KEY, json!({"title": "Sentinel"}));

        let site = resolver_with(store)
            .resolve(&HostKey::new("cdn-farm.io"), &EnvTable::default(), None, now())
            .await;

        assert_eq!(site.config.title.as_deref(), Some("Sentinel"));
    }

    #[tokio::test]
    async fn env_blob_is_consulted_when_kv_misses() {
        let env = EnvTable::from_pairs([("CDN_FARM_IO_CONFIG", r#"{"title": "Blob"}"#)]);

        let site = resolver_with(MemoryKvStore::new())
            .resolve(&HostKey::new("cdn-farm.io"), &env, None, now())
            .await;

        assert_eq!(site.config.title.as_deref(), Some("Blob"));
    }

    #[tokio::test]
    async fn precedence_per_domain_env_over_global_over_store() {
        let mut store = MemoryKvStore::new();
        store.insert("cdn-farm.io", json!({"title": "Stored"}));
        let env = EnvTable::from_pairs([
            ("CDN_FARM_IO_TITLE", "Per-domain"),
            ("TITLE", "Global"),
        ]);

        let site = resolver_with(store)
            .resolve(&HostKey::new("cdn-farm.io"), &env, None, now())
            .await;

        assert_eq!(site.config.title.as_deref(), Some("Per-domain"));
    }

    #[tokio::test]
    async fn global_env_override_beats_stored_value() {
        let mut store = MemoryKvStore::new();
        store.insert("cdn-farm.io", json!({"mode": "landing"}));
        let env = EnvTable::from_pairs([("MODE", "coming-soon")]);

        let site = resolver_with(store)
            .resolve(&HostKey::new("cdn-farm.io"), &env, None, now())
            .await;

        assert_eq!(site.config.mode, PageMode::ComingSoon);
    }

    #[tokio::test]
    async fn structured_fields_come_from_base_record_only() {
        let mut store = MemoryKvStore::new();
        store.insert(
            "cdn-farm.io",
            json!({"links": [{"title": "Docs", "url": "https://docs.example"}]}),
        );
        let env = EnvTable::from_pairs([("CDN_FARM_IO_LINKS", "[]")]);

        let site = resolver_with(store)
            .resolve(&HostKey::new("cdn-farm.io"), &env, None, now())
            .await;

        assert_eq!(site.config.links.len(), 1);
        assert_eq!(
            site.config.links.first().map(|l| l.title.as_str()),
            Some("Docs")
        );
    }

    #[tokio::test]
    async fn derived_fields_are_computed_from_registration_date() {
        let mut store = MemoryKvStore::new();
        store.insert("cdn-farm.io", json!({"registrationDate": "2010-01-15"}));

        let site = resolver_with(store)
            .resolve(&HostKey::new("cdn-farm.io"), &EnvTable::default(), None, now())
            .await;

        assert_eq!(site.config.domain_age_years, "15+");
        assert_eq!(site.config.domain_registration, "Registered in 2010");
        assert_eq!(site.config.domain_extension, ".io");
    }

    // Asymmetric on purpose: a stored derived value wins even when the
    // registration date would recompute to something else.
    #[tokio::test]
    async fn pre_supplied_derived_value_wins_over_recomputation() {
        let mut store = MemoryKvStore::new();
        store.insert(
            "cdn-farm.io",
            json!({"registrationDate": "2010-01-15", "domainAgeYears": "20+"}),
        );

        let site = resolver_with(store)
            .resolve(&HostKey::new("cdn-farm.io"), &EnvTable::default(), None, now())
            .await;

        assert_eq!(site.config.domain_age_years, "20+");
        assert_eq!(site.config.domain_registration, "Registered in 2010");
    }

    #[tokio::test]
    async fn resolution_is_idempotent() {
        let mut store = MemoryKvStore::new();
        store.insert("cdn-farm.io", json!({"mode": "landing", "title": "T"}));
        let resolver = resolver_with(store);
        let env = EnvTable::from_pairs([("ACCENT_COLOR", "#112233")]);
        let host = HostKey::new("cdn-farm.io");

        let first = resolver.resolve(&host, &env, None, now()).await;
        let second = resolver.resolve(&host, &env, None, now()).await;

        assert_eq!(first.config, second.config);
    }

    #[tokio::test]
    async fn preset_index_selects_alternate_record() {
        let path = preset_file(
            "switch",
            r#"[
                {"name": "First", "config": {"title": "One"}},
                {"name": "Second", "config": {"title": "Two"}}
            ]"#,
        );
        let store = PresetStore::new(&path, vec!["localhost".to_string()]);
        let resolver = SiteResolver::new(store, None);
        let host = HostKey::new("localhost");

        let picked = resolver
            .resolve(&host, &EnvTable::default(), Some(1), now())
            .await;
        assert_eq!(picked.config.title.as_deref(), Some("Two"));
        assert_eq!(picked.active_preset, 1);
        assert_eq!(picked.presets.map(|p| p.len()), Some(2));

        let out_of_range = resolver
            .resolve(&host, &EnvTable::default(), Some(9), now())
            .await;
        assert_eq!(out_of_range.config.title.as_deref(), Some("One"));
        assert_eq!(out_of_range.active_preset, 0);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn presets_are_ignored_for_public_hostnames() {
        let path = preset_file(
            "public",
            r#"[{"name": "Dev", "config": {"title": "Dev only"}}]"#,
        );
        let store = PresetStore::new(&path, vec!["localhost".to_string()]);
        let resolver = SiteResolver::new(store, None);

        let site = resolver
            .resolve(&HostKey::new("cdn-farm.io"), &EnvTable::default(), Some(0), now())
            .await;

        assert!(site.presets.is_none());
        assert_ne!(site.config.title.as_deref(), Some("Dev only"));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn env_overrides_apply_on_top_of_presets() {
        let path = preset_file(
            "override",
            r#"[{"name": "Dev", "config": {"title": "Preset", "mode": "landing"}}]"#,
        );
        let store = PresetStore::new(&path, vec!["localhost".to_string()]);
        let resolver = SiteResolver::new(store, None);
        let env = EnvTable::from_pairs([("LOCALHOST_TITLE", "Overridden")]);

        let site = resolver
            .resolve(&HostKey::new("localhost"), &env, None, now())
            .await;

        assert_eq!(site.config.title.as_deref(), Some("Overridden"));
        assert_eq!(site.config.mode, PageMode::Landing);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn unrecognized_stored_mode_resolves_to_parking() {
        let mut store = MemoryKvStore::new();
        store.insert("cdn-farm.io", json!({"mode": "bogus"}));

        let site = resolver_with(store)
            .resolve(&HostKey::new("cdn-farm.io"), &EnvTable::default(), None, now())
            .await;

        assert_eq!(site.config.mode, PageMode::Parking);
    }
}
