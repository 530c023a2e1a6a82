use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::elements::{rgb, BehaviorKind, Category, ElementId, ElementProps, Matter, Particle};

/// Ordered list of prototype particles the host cycles through.
///
/// Seed data only; the world clones prototypes out of it on placement.
#[derive(Clone, Debug)]
pub struct Palette {
    elements: Vec<ElementProps>,
    element_key_to_id: HashMap<String, ElementId>,
    element_manifest: Vec<PaletteManifestElement>,
}

impl Palette {
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    /// Built-in palette: sand, metal scraps and water.
    pub fn builtin() -> Self {
        let sand = ElementProps {
            color: rgb(255, 255, 0),
            behavior: BehaviorKind::Powder,
            friction: 0.5,
            bounciness: 2.0,
            energy_consumption: 1.0,
            matter: Matter::Powder { powderity_min: 0.0, powderity_max: 0.0 },
        };
        let scraps = ElementProps {
            color: rgb(169, 169, 169),
            behavior: BehaviorKind::ScatterPowder,
            friction: 0.5,
            bounciness: 2.0,
            energy_consumption: 1.0,
            matter: Matter::Powder { powderity_min: 0.2, powderity_max: 0.8 },
        };
        let water = ElementProps {
            color: rgb(30, 144, 255),
            behavior: BehaviorKind::Liquid,
            friction: 0.5,
            bounciness: 2.0,
            energy_consumption: 0.8,
            matter: Matter::Liquid {
                fluid_pouring: 1,
                fluid_pouring_min: 0.5,
                fluid_pouring_max: 1.5,
                viscosity: 0.1,
                density: 1.0,
            },
        };

        let entries = [
            ("sand-powder", "Sand", "SAND", sand),
            ("metal-scraps", "Metal Scraps", "MTLS", scraps),
            ("water", "Water", "WATR", water),
        ];

        let mut elements = Vec::with_capacity(entries.len());
        let mut element_key_to_id = HashMap::new();
        let mut element_manifest = Vec::with_capacity(entries.len());
        for (idx, (key, display_name, short_name, props)) in entries.into_iter().enumerate() {
            let id = idx as ElementId;
            element_key_to_id.insert(key.to_string(), id);
            element_manifest.push(PaletteManifestElement::new(id, key, display_name, short_name, &props));
            elements.push(props);
        }

        Self {
            elements,
            element_key_to_id,
            element_manifest,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn props(&self, id: ElementId) -> Option<&ElementProps> {
        self.elements.get(id as usize)
    }

    pub fn id_by_key(&self, key: &str) -> Option<ElementId> {
        self.element_key_to_id.get(key).copied()
    }

    /// New independent particle cloned from prototype `id`
    pub fn instantiate(&self, id: ElementId) -> Option<Particle> {
        self.props(id).map(|props| Particle::spawn(id, props))
    }

    pub fn manifest_json(&self) -> String {
        let out = PaletteManifest {
            format_version: 1,
            elements: &self.element_manifest,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        if bundle.elements.is_empty() {
            return Err("palette bundle has no elements".to_string());
        }
        if bundle.elements.len() > (ElementId::MAX as usize) + 1 {
            return Err(format!(
                "too many elements for u8 ids: {}",
                bundle.elements.len()
            ));
        }

        let mut elements = Vec::with_capacity(bundle.elements.len());
        let mut element_key_to_id = HashMap::new();
        let mut element_manifest = Vec::with_capacity(bundle.elements.len());

        for (idx, el) in bundle.elements.into_iter().enumerate() {
            let id = idx as ElementId;
            let category = category_from_str(&el.category)?;

            let behavior = match el.behavior.as_deref() {
                None => default_behavior(category),
                Some(s) => behavior_kind_from_str(s)?,
            };
            check_behavior_fits(&el.key, category, behavior)?;

            check_range(&el.key, "friction", el.friction, 0.0, 1.0)?;
            if !(el.energy_consumption > 0.0 && el.energy_consumption <= 1.0) {
                return Err(format!(
                    "element {} has energyConsumption {} outside (0, 1]",
                    el.key, el.energy_consumption
                ));
            }
            if !el.bounciness.is_finite() || el.bounciness < 0.0 {
                return Err(format!("element {} has invalid bounciness {}", el.key, el.bounciness));
            }

            let matter = match category {
                Category::Solid => Matter::Solid,
                Category::Gas => Matter::Gas,
                Category::Powder => {
                    let p = el.powder.unwrap_or_default();
                    if p.powderity_min > p.powderity_max {
                        return Err(format!(
                            "element {} has powderityMin {} > powderityMax {}",
                            el.key, p.powderity_min, p.powderity_max
                        ));
                    }
                    Matter::Powder {
                        powderity_min: p.powderity_min as f32,
                        powderity_max: p.powderity_max as f32,
                    }
                }
                Category::Liquid => {
                    let l = el.liquid.unwrap_or_default();
                    Matter::Liquid {
                        fluid_pouring: l.fluid_pouring,
                        fluid_pouring_min: l.fluid_pouring_min as f32,
                        fluid_pouring_max: l.fluid_pouring_max as f32,
                        viscosity: l.viscosity as f32,
                        density: l.density as f32,
                    }
                }
            };

            let props = ElementProps {
                color: el.color,
                behavior,
                friction: el.friction as f32,
                bounciness: el.bounciness as f32,
                energy_consumption: el.energy_consumption as f32,
                matter,
            };

            if element_key_to_id.insert(el.key.clone(), id).is_some() {
                return Err(format!("duplicate element key: {}", el.key));
            }

            let display_name = el.display_name.unwrap_or_else(|| el.key.clone());
            let short_name = el.short_name.unwrap_or_default();
            element_manifest.push(PaletteManifestElement::new(
                id,
                &el.key,
                &display_name,
                &short_name,
                &props,
            ));
            elements.push(props);
        }

        Ok(Self {
            elements,
            element_key_to_id,
            element_manifest,
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteManifest<'a> {
    format_version: u32,
    elements: &'a [PaletteManifestElement],
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteManifestElement {
    id: ElementId,
    key: String,
    display_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    short_name: String,
    category: &'static str,
    behavior: &'static str,
    color: u32,
}

impl PaletteManifestElement {
    fn new(id: ElementId, key: &str, display_name: &str, short_name: &str, props: &ElementProps) -> Self {
        Self {
            id,
            key: key.to_string(),
            display_name: display_name.to_string(),
            short_name: short_name.to_string(),
            category: props.matter.category().as_str(),
            behavior: props.behavior.as_str(),
            color: props.color,
        }
    }
}

fn check_range(key: &str, field: &str, v: f64, min: f64, max: f64) -> Result<(), String> {
    if v.is_finite() && v >= min && v <= max {
        Ok(())
    } else {
        Err(format!("element {} has {} {} outside [{}, {}]", key, field, v, min, max))
    }
}

fn default_behavior(category: Category) -> BehaviorKind {
    match category {
        Category::Powder => BehaviorKind::Powder,
        Category::Liquid => BehaviorKind::Liquid,
        Category::Solid | Category::Gas => BehaviorKind::None,
    }
}

fn check_behavior_fits(key: &str, category: Category, behavior: BehaviorKind) -> Result<(), String> {
    let ok = match behavior {
        BehaviorKind::None => true,
        BehaviorKind::Powder | BehaviorKind::ScatterPowder => category == Category::Powder,
        BehaviorKind::Liquid => category == Category::Liquid,
    };
    if ok {
        Ok(())
    } else {
        Err(format!(
            "element {}: behavior {} does not apply to category {}",
            key,
            behavior.as_str(),
            category.as_str()
        ))
    }
}

fn behavior_kind_from_str(s: &str) -> Result<BehaviorKind, String> {
    match s {
        "none" => Ok(BehaviorKind::None),
        "powder" => Ok(BehaviorKind::Powder),
        "scatter_powder" => Ok(BehaviorKind::ScatterPowder),
        "liquid" => Ok(BehaviorKind::Liquid),
        _ => Err(format!("unknown behavior kind: {}", s)),
    }
}

fn category_from_str(s: &str) -> Result<Category, String> {
    match s {
        "solid" => Ok(Category::Solid),
        "powder" => Ok(Category::Powder),
        "liquid" => Ok(Category::Liquid),
        "gas" => Ok(Category::Gas),
        _ => Err(format!("unknown category: {}", s)),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    elements: Vec<BundleElement>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleElement {
    key: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
    category: String,
    color: u32,
    #[serde(default)]
    behavior: Option<String>,
    #[serde(default = "default_friction")]
    friction: f64,
    #[serde(default = "default_bounciness")]
    bounciness: f64,
    #[serde(default = "default_energy_consumption")]
    energy_consumption: f64,
    #[serde(default)]
    powder: Option<BundlePowder>,
    #[serde(default)]
    liquid: Option<BundleLiquid>,
}

fn default_friction() -> f64 {
    0.5
}

fn default_bounciness() -> f64 {
    2.0
}

fn default_energy_consumption() -> f64 {
    1.0
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundlePowder {
    #[serde(default)]
    powderity_min: f64,
    #[serde(default)]
    powderity_max: f64,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleLiquid {
    #[serde(default)]
    fluid_pouring: i32,
    #[serde(default)]
    fluid_pouring_min: f64,
    #[serde(default)]
    fluid_pouring_max: f64,
    #[serde(default)]
    viscosity: f64,
    #[serde(default)]
    density: f64,
}
