//! Product service: sample product payloads and bulk catalog seeding.

use std::collections::BTreeMap;
use std::time::Duration;

use ocm_catalog_core::{
    Attribute, CategoryId, Image, ImageDimensions, LocalizedString, Money, Product, ProductDraft,
    ProductTypeId, ProductVariantDraft, Reference,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::commercetools::{CommerceError, CommercetoolsClient};

/// Pause between creates during seeding.
pub const DEFAULT_SEED_PAUSE: Duration = Duration::from_millis(100);

const TEST_IMAGE_URL: &str = "https://outletcity.freetls.fastly.net/medias/sys_master/noidx/noidx/h34/hdc/9820870737950/4058213070309-br-1280x1920-1.jpg?width=382";
const WATER_RESISTANT_IMAGE_URL: &str = "https://example.com/images/water-resistant.png";

/// Shirt colors accepted by the `color` enum attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
}

impl Color {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Localized display name for the `display-color` attribute.
    #[must_use]
    pub fn display(self) -> LocalizedString {
        match self {
            Self::Red => LocalizedString::from([("en", "Red"), ("de", "Rot")]),
            Self::Blue => LocalizedString::from([("en", "Blue"), ("de", "Blau")]),
            Self::Green => LocalizedString::from([("en", "Green"), ("de", "Grün")]),
        }
    }
}

/// Size, color, and price of one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variation {
    pub size: &'static str,
    pub color: Color,
    pub price: Money,
}

/// S/red at the base price, M/blue at +5.00, L/green at +10.00.
#[must_use]
pub fn generate_variations(base_price: Money) -> [Variation; 3] {
    [
        Variation {
            size: "S",
            color: Color::Red,
            price: base_price,
        },
        Variation {
            size: "M",
            color: Color::Blue,
            price: base_price.plus_cents(500),
        },
        Variation {
            size: "L",
            color: Color::Green,
            price: base_price.plus_cents(1000),
        },
    ]
}

/// One product to create during seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTemplate {
    pub name: String,
    pub brand: String,
    /// Short category name; the product goes into `women-<category>`.
    pub category: String,
    /// Base price in EUR cents.
    pub base_price: i64,
}

impl ProductTemplate {
    /// Key of the category this template is assigned to.
    #[must_use]
    pub fn category_key(&self) -> String {
        format!("women-{}", self.category)
    }
}

/// A product created during seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeededProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub style_code: String,
}

/// A template that could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedFailure {
    pub name: String,
    pub category: String,
    pub style_code: String,
    pub error: String,
}

/// Outcome of [`ProductService::seed_catalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub created: Vec<SeededProduct>,
    pub failed: Vec<SeedFailure>,
}

impl SeedReport {
    /// Created product count per short category name.
    #[must_use]
    pub fn by_category(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for product in &self.created {
            *counts.entry(product.category.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// `women-<category>-<NNN>`.
#[must_use]
pub fn style_code(category: &str, counter: usize) -> String {
    format!("women-{category}-{counter:03}")
}

/// Attribute group for one material composition entry.
fn material(key: &str, fraction: u32) -> Vec<Attribute> {
    vec![
        Attribute::new("material", key),
        Attribute::new("fraction", fraction),
        Attribute::new("unit", "percent"),
    ]
}

/// Attributes shared by every variant: brand, composition, benefits.
#[must_use]
pub fn common_attributes(brand: &str) -> Vec<Attribute> {
    let water_resistant = vec![
        Attribute::new("code", "water-resistant"),
        Attribute::localized(
            "name",
            &LocalizedString::from([("en", "Water Resistant"), ("de", "Wasserabweisend")]),
        ),
        Attribute::new("imageUrl", WATER_RESISTANT_IMAGE_URL),
    ];

    vec![
        Attribute::new("brand-name", brand),
        Attribute::nested_set(
            "outer-fabric1",
            vec![material("KAMEL", 50), material("KASCHGORA", 50)],
        ),
        Attribute::nested_set("outer-fabric2", vec![material("HENEQUEN", 100)]),
        Attribute::nested_set("lining1", vec![material("BIBER", 100)]),
        Attribute::nested_set("product-benefit", vec![water_resistant]),
    ]
}

fn variant(brand: &str, sku: String, size: &str, color: Color, price: Money) -> ProductVariantDraft {
    let mut attributes = common_attributes(brand);
    attributes.push(Attribute::new("size", size));
    attributes.push(Attribute::new("color", color.key()));
    attributes.push(Attribute::localized("display-color", &color.display()));

    ProductVariantDraft {
        sku: Some(sku),
        prices: vec![price.into()],
        attributes,
        ..ProductVariantDraft::default()
    }
}

/// Draft for the development test product.
///
/// Master variant `-1` is L/blue at 19.99 EUR with one image; variants
/// `-2` to `-4` are M, L, XL in red at 29.99 EUR.
#[must_use]
pub fn test_product_draft(
    product_type_id: &ProductTypeId,
    style_code: &str,
    name: &str,
    brand: &str,
) -> ProductDraft {
    let mut master = variant(
        brand,
        format!("{style_code}-1"),
        "L",
        Color::Blue,
        Money::eur(1999),
    );
    master.images.push(Image {
        url: TEST_IMAGE_URL.to_string(),
        dimensions: ImageDimensions { w: 382, h: 573 },
        label: None,
    });

    let variants = ["M", "L", "XL"]
        .into_iter()
        .enumerate()
        .map(|(i, size)| {
            variant(
                brand,
                format!("{style_code}-{}", i + 2),
                size,
                Color::Red,
                Money::eur(2999),
            )
        })
        .collect();

    ProductDraft {
        product_type: Reference::product_type(product_type_id),
        name: LocalizedString::from(name),
        slug: LocalizedString::from(style_code),
        key: Some(style_code.to_string()),
        description: None,
        categories: Vec::new(),
        master_variant: Some(master),
        variants,
        publish: None,
    }
}

/// Draft for a three-variant product in the given categories.
#[must_use]
pub fn simple_product_draft(
    product_type_id: &ProductTypeId,
    style_code: &str,
    name: &str,
    brand: &str,
    base_price: Money,
    category_ids: &[CategoryId],
) -> ProductDraft {
    let mut variants = generate_variations(base_price)
        .into_iter()
        .enumerate()
        .map(|(i, v)| variant(brand, format!("{style_code}-{}", i + 1), v.size, v.color, v.price));

    let master_variant = variants.next();

    ProductDraft {
        product_type: Reference::product_type(product_type_id),
        name: LocalizedString::from(name),
        slug: LocalizedString::from(style_code),
        key: Some(style_code.to_string()),
        description: None,
        categories: category_ids.iter().map(Reference::category).collect(),
        master_variant,
        variants: variants.collect(),
        publish: Some(true),
    }
}

/// Product operations bound to one platform client and product type.
#[derive(Debug, Clone)]
pub struct ProductService {
    client: CommercetoolsClient,
    product_type_id: ProductTypeId,
    seed_pause: Duration,
}

impl ProductService {
    /// Create a new product service for products of `product_type_id`.
    #[must_use]
    pub const fn new(client: CommercetoolsClient, product_type_id: ProductTypeId) -> Self {
        Self {
            client,
            product_type_id,
            seed_pause: DEFAULT_SEED_PAUSE,
        }
    }

    /// Override the pause between creates during seeding.
    #[must_use]
    pub const fn with_seed_pause(mut self, pause: Duration) -> Self {
        self.seed_pause = pause;
        self
    }

    /// Create the development test product.
    ///
    /// # Errors
    ///
    /// Returns an error if the create call fails.
    #[instrument(skip(self))]
    pub async fn create_test_product(
        &self,
        style_code: &str,
        name: &str,
        brand: &str,
    ) -> Result<Product, CommerceError> {
        let draft = test_product_draft(&self.product_type_id, style_code, name, brand);
        self.client.create_product(&draft).await
    }

    /// Create a published three-variant product in the given categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the create call fails.
    #[instrument(skip(self, category_ids), fields(categories = category_ids.len()))]
    pub async fn create_simple_product(
        &self,
        style_code: &str,
        name: &str,
        brand: &str,
        base_price: Money,
        category_ids: &[CategoryId],
    ) -> Result<Product, CommerceError> {
        let draft = simple_product_draft(
            &self.product_type_id,
            style_code,
            name,
            brand,
            base_price,
            category_ids,
        );
        self.client.create_product(&draft).await
    }

    /// Create one product per template in its `women-<category>` category.
    ///
    /// Every referenced category is resolved first; a missing one aborts the
    /// run before anything is created. After that, a failed product is logged
    /// and recorded in the report and seeding continues with the next
    /// template. The style code counter only advances on success.
    ///
    /// # Errors
    ///
    /// Returns an error if a category lookup fails or a category is missing.
    #[instrument(skip(self, templates), fields(templates = templates.len()))]
    pub async fn seed_catalog(
        &self,
        templates: &[ProductTemplate],
    ) -> Result<SeedReport, CommerceError> {
        let mut categories: BTreeMap<String, CategoryId> = BTreeMap::new();
        for template in templates {
            let key = template.category_key();
            if categories.contains_key(&key) {
                continue;
            }
            let category = self
                .client
                .get_category_by_key(&key)
                .await?
                .ok_or_else(|| CommerceError::NotFound(format!("category key={key}")))?;
            categories.insert(key, category.id);
        }

        let mut report = SeedReport::default();
        let mut counter = 1;

        for template in templates {
            let style = style_code(&template.category, counter);
            let name = format!("{} - Women's", template.name);
            let category_ids: Vec<CategoryId> = categories
                .get(&template.category_key())
                .cloned()
                .into_iter()
                .collect();

            match self
                .create_simple_product(
                    &style,
                    &name,
                    &template.brand,
                    Money::eur(template.base_price),
                    &category_ids,
                )
                .await
            {
                Ok(product) => {
                    tracing::info!(counter, style_code = %style, "Seeded product");
                    report.created.push(SeededProduct {
                        id: product.id.into_inner(),
                        name,
                        category: template.category.clone(),
                        style_code: style,
                    });
                    counter += 1;
                }
                Err(e) => {
                    tracing::error!(error = %e, style_code = %style, "Failed to seed product");
                    report.failed.push(SeedFailure {
                        name,
                        category: template.category.clone(),
                        style_code: style,
                        error: e.to_string(),
                    });
                }
            }

            if !self.seed_pause.is_zero() {
                tokio::time::sleep(self.seed_pause).await;
            }
        }

        Ok(report)
    }
}
