use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vitrine::{
    ActionKind, CatalogStore, MemoryCatalog, PersonalizationConfig, PersonalizationEngine, Product,
    Tag, TagKind, User,
};

fn seed_catalog(catalog: &MemoryCatalog) {
    let products = vec![
        Product::builder()
            .name("Oak dining chair")
            .rating_average(4.2)
            .rating_count(180)
            .stock(12)
            .tags(vec![
                Tag::new(TagKind::Attribute, "wood"),
                Tag::new(TagKind::Category, "furniture"),
                Tag::new(TagKind::Brand, "Grainworks"),
            ])
            .build(),
        Product::builder()
            .name("Walnut standing desk")
            .rating_average(4.7)
            .rating_count(96)
            .stock(4)
            .tags(vec![
                Tag::weighted(TagKind::Attribute, "wood", 2.0),
                Tag::new(TagKind::Usage, "office"),
                Tag::new(TagKind::Category, "furniture"),
            ])
            .build(),
        Product::builder()
            .name("Steel floor lamp")
            .rating_average(4.9)
            .rating_count(310)
            .stock(25)
            .tags(vec![
                Tag::new(TagKind::Attribute, "steel"),
                Tag::new(TagKind::Category, "lighting"),
            ])
            .build(),
        Product::builder()
            .name("Ceramic table lamp")
            .rating_average(4.4)
            .rating_count(57)
            .stock(9)
            .tags(vec![
                Tag::new(TagKind::Attribute, "ceramic"),
                Tag::new(TagKind::Category, "lighting"),
            ])
            .build(),
        Product::builder()
            .name("Outdoor teak bench")
            .rating_average(4.5)
            .rating_count(41)
            .stock(3)
            .tags(vec![
                Tag::new(TagKind::Attribute, "wood"),
                Tag::new(TagKind::Usage, "outdoor"),
                Tag::new(TagKind::Category, "furniture"),
            ])
            .build(),
    ];

    for product in products {
        catalog.insert_product(product);
    }
}

fn print_picks(label: &str, picks: &[Product]) {
    println!("{label}");
    for (i, product) in picks.iter().enumerate() {
        println!(
            "   {}. {} (rating {:.1})",
            i + 1,
            product.name,
            product.rating_average
        );
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vitrine=info")),
        )
        .init();

    println!("🛒 Vitrine personalization demo");
    println!();

    let catalog = Arc::new(MemoryCatalog::new());
    seed_catalog(catalog.as_ref());
    catalog.upsert_user(User::new("demo_user", "Demo"));
    println!("Seeded {} products", catalog.product_count());
    println!();

    let store: Arc<dyn CatalogStore> = catalog.clone();
    let engine = PersonalizationEngine::new(store, PersonalizationConfig::from_env());

    let cold = engine.recommendations_for("demo_user", None).await?;
    print_picks("Cold start (no signal yet):", &cold);

    // Browse wooden furniture, then commit to the desk.
    let wood_picks: Vec<Product> = cold
        .iter()
        .filter(|p| p.tags.iter().any(|t| t.normalized_value() == "wood"))
        .cloned()
        .collect();
    for product in &wood_picks {
        engine
            .record_interaction("demo_user", product, ActionKind::Click)
            .await;
    }
    if let Some(desk) = wood_picks.first() {
        engine
            .record_interaction("demo_user", desk, ActionKind::Cart)
            .await;
        engine
            .record_interaction("demo_user", desk, ActionKind::Purchase)
            .await;
    }

    let personalized = engine.recommendations_for("demo_user", None).await?;
    print_picks("After browsing and buying wooden furniture:", &personalized);

    engine.decay_interests("demo_user").await?;
    let decayed = engine.recommendations_for("demo_user", None).await?;
    print_picks("After one decay step (ordering is unchanged):", &decayed);

    let stats = engine.stats();
    println!(
        "Engine stats: {} interactions recorded, {} failures swallowed, {} selections served",
        stats.interactions_recorded, stats.recording_failures, stats.selections_served
    );

    Ok(())
}
