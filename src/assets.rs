/*
 * Assets Module
 *
 * Every image the demos use is registered under an alias and resolved
 * relative to an assets directory. Textures are uploaded to the GPU through
 * nannou. The displacement map is kept on the CPU so it can be sampled.
 *
 * A failed load is reported as an AssetError. The application logs it and
 * falls back to procedural drawing for whatever is missing.
 */

use nannou::image;
use nannou::prelude::*;
use nannou::wgpu;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::effects::DisplacementMap;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no asset is registered under the alias `{0}`")]
    UnknownAlias(String),
    #[error("asset `{alias}` not found at {}", .path.display())]
    Missing { alias: String, path: PathBuf },
    #[error("failed to decode image {}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub struct AssetEntry {
    pub alias: &'static str,
    pub file: &'static str,
}

pub const MANIFEST: &[AssetEntry] = &[
    AssetEntry { alias: "bunny", file: "bunny.png" },
    AssetEntry { alias: "background", file: "pond_background.jpg" },
    AssetEntry { alias: "fish1", file: "fish1.png" },
    AssetEntry { alias: "fish2", file: "fish2.png" },
    AssetEntry { alias: "fish3", file: "fish3.png" },
    AssetEntry { alias: "fish4", file: "fish4.png" },
    AssetEntry { alias: "fish5", file: "fish5.png" },
    AssetEntry { alias: "overlay", file: "wave_overlay.png" },
    AssetEntry { alias: "displacement", file: "displacement_map.png" },
];

pub const FISH_ALIASES: [&str; crate::FISH_VARIANTS] = ["fish1", "fish2", "fish3", "fish4", "fish5"];

// Find the file registered under `alias` inside `dir`
pub fn resolve(dir: &Path, alias: &str) -> Result<PathBuf, AssetError> {
    let entry = MANIFEST
        .iter()
        .find(|entry| entry.alias == alias)
        .ok_or_else(|| AssetError::UnknownAlias(alias.to_string()))?;

    let path = dir.join(entry.file);
    if !path.is_file() {
        return Err(AssetError::Missing {
            alias: alias.to_string(),
            path,
        });
    }
    Ok(path)
}

pub fn load_texture(app: &App, dir: &Path, alias: &str) -> Result<wgpu::Texture, AssetError> {
    let path = resolve(dir, alias)?;
    wgpu::Texture::from_path(app, &path).map_err(|source| AssetError::Image { path, source })
}

pub fn load_displacement(dir: &Path) -> Result<DisplacementMap, AssetError> {
    let path = resolve(dir, "displacement")?;
    DisplacementMap::open(&path)
}

// Loaded resources for a demo, anything that failed to load is absent.
// Fish textures keep one slot per artwork variant so a missing file never
// shifts the others.
#[derive(Default)]
pub struct PondAssets {
    pub bunny: Option<wgpu::Texture>,
    pub background: Option<wgpu::Texture>,
    pub fish: Vec<Option<wgpu::Texture>>,
    pub overlay: Option<wgpu::Texture>,
    pub displacement: Option<DisplacementMap>,
}

// Tracks batch loading and logs progress after each asset
struct Progress {
    done: usize,
    total: usize,
}

impl Progress {
    fn advance<T>(&mut self, alias: &str, result: Result<T, AssetError>) -> Option<T> {
        self.done += 1;
        let fraction = self.done as f32 / self.total.max(1) as f32;

        match result {
            Ok(value) => {
                log::info!("asset load progress {:>3.0}% ({})", fraction * 100.0, alias);
                Some(value)
            }
            Err(err) => {
                log::warn!("asset load progress {:>3.0}%: {}", fraction * 100.0, err);
                None
            }
        }
    }
}

impl PondAssets {
    // Assets for the spinning sprite demo
    pub fn load_spin(app: &App, dir: &Path) -> Self {
        let mut progress = Progress { done: 0, total: 1 };
        Self {
            bunny: progress.advance("bunny", load_texture(app, dir, "bunny")),
            ..Self::default()
        }
    }

    // Assets for the pond demo. The displacement map is always loaded so
    // distortion can be switched on while running.
    pub fn load_pond(app: &App, dir: &Path) -> Self {
        let total = 3 + FISH_ALIASES.len();
        let mut progress = Progress { done: 0, total };

        let background = progress.advance("background", load_texture(app, dir, "background"));

        let fish = FISH_ALIASES
            .iter()
            .map(|alias| progress.advance(alias, load_texture(app, dir, alias)))
            .collect::<Vec<_>>();

        let overlay = progress.advance("overlay", load_texture(app, dir, "overlay"));
        let displacement = progress.advance("displacement", load_displacement(dir));

        Self {
            bunny: None,
            background,
            fish,
            overlay,
            displacement,
        }
    }

    // Texture for a fish artwork variant, None when that file failed to load
    pub fn fish_texture(&self, variant: usize) -> Option<&wgpu::Texture> {
        variant_slot(&self.fish, variant)
    }

    pub fn fish_textures_loaded(&self) -> usize {
        self.fish.iter().flatten().count()
    }

    // Map and strength to distort with, when distortion is on and a map exists
    pub fn active_displacement(&self, enabled: bool, scale: f32) -> Option<(&DisplacementMap, f32)> {
        match (&self.displacement, enabled) {
            (Some(map), true) => Some((map, scale)),
            _ => None,
        }
    }
}

// Slot for `variant`, wrapping over the variant count
fn variant_slot<T>(slots: &[Option<T>], variant: usize) -> Option<&T> {
    if slots.is_empty() {
        return None;
    }
    slots[variant % slots.len()].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fish_variant_does_not_shift_the_others() {
        let slots = vec![Some(1), None, Some(3), Some(4), Some(5)];
        assert_eq!(variant_slot(&slots, 0), Some(&1));
        assert_eq!(variant_slot(&slots, 1), None);
        assert_eq!(variant_slot(&slots, 2), Some(&3));
        assert_eq!(variant_slot(&slots, 4), Some(&5));
        assert_eq!(variant_slot(&slots, 7), Some(&3));
    }

    #[test]
    fn no_fish_slots_means_no_texture() {
        let slots: Vec<Option<u8>> = Vec::new();
        assert_eq!(variant_slot(&slots, 3), None);
        assert_eq!(PondAssets::default().fish_texture(0).map(|_| ()), None);
        assert_eq!(PondAssets::default().fish_textures_loaded(), 0);
    }

    #[test]
    fn distortion_switched_on_later_uses_the_loaded_map() {
        let assets = PondAssets {
            displacement: Some(DisplacementMap::new(image::RgbaImage::new(2, 2))),
            ..PondAssets::default()
        };

        // Started with distortion off, then ticked on in the controls
        assert!(assets.active_displacement(false, 50.0).is_none());
        let (map, scale) = assets.active_displacement(true, 50.0).unwrap();
        assert_eq!(map.size(), (2, 2));
        assert_eq!(scale, 50.0);
    }

    #[test]
    fn distortion_without_a_map_is_inactive() {
        assert!(PondAssets::default().active_displacement(true, 50.0).is_none());
    }

    #[test]
    fn manifest_aliases_are_unique() {
        for (i, a) in MANIFEST.iter().enumerate() {
            for b in &MANIFEST[i + 1..] {
                assert_ne!(a.alias, b.alias);
            }
        }
    }

    #[test]
    fn every_fish_alias_is_registered() {
        for alias in FISH_ALIASES {
            assert!(MANIFEST.iter().any(|entry| entry.alias == alias));
        }
    }

    #[test]
    fn resolve_rejects_unknown_alias() {
        let err = resolve(Path::new("assets"), "shark").unwrap_err();
        assert!(matches!(err, AssetError::UnknownAlias(ref a) if a == "shark"));
        assert_eq!(err.to_string(), "no asset is registered under the alias `shark`");
    }

    #[test]
    fn resolve_reports_missing_file() {
        let dir = std::env::temp_dir().join("fishpond-no-assets-here");
        match resolve(&dir, "fish3") {
            Err(AssetError::Missing { alias, path }) => {
                assert_eq!(alias, "fish3");
                assert_eq!(path, dir.join("fish3.png"));
            }
            other => panic!("expected a missing asset, got {:?}", other),
        }
    }

    #[test]
    fn resolve_finds_existing_file() {
        let dir = std::env::temp_dir().join(format!("fishpond-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("wave_overlay.png"), b"not really a png").unwrap();

        let path = resolve(&dir, "overlay").unwrap();
        assert_eq!(path, dir.join("wave_overlay.png"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn undecodable_displacement_map_is_an_image_error() {
        let dir = std::env::temp_dir().join(format!("fishpond-bad-map-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("displacement_map.png"), b"garbage").unwrap();

        let err = load_displacement(&dir).err().unwrap();
        assert!(matches!(err, AssetError::Image { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn displacement_map_loads_from_disk() {
        let dir = std::env::temp_dir().join(format!("fishpond-good-map-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let pixels = image::RgbaImage::from_pixel(4, 3, image::Rgba([128, 128, 128, 255]));
        pixels.save(dir.join("displacement_map.png")).unwrap();

        let map = load_displacement(&dir).unwrap();
        assert_eq!(map.size(), (4, 3));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
