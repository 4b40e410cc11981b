use serde::Serialize;

use crate::model::quote_request::ProductType;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogCategory {
    pub category: &'static str,
    /// Quote form category this range is requested under
    pub product_type: ProductType,
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactCard {
    pub title: &'static str,
    pub content: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub categories: Vec<CatalogCategory>,
    pub product_types: Vec<ProductType>,
    pub contact: Vec<ContactCard>,
}

fn item(name: &'static str, description: &'static str, price: &'static str) -> CatalogItem {
    CatalogItem { name, description, price }
}

impl Catalog {
    pub fn standard() -> Self {
        let categories = vec![
            CatalogCategory {
                category: "Boîtes d'expédition",
                product_type: ProductType::ShippingBoxes,
                items: vec![
                    item("Caisse américaine", "Double cannelure, haute résistance", "À partir de 0.85fcfa"),
                    item("Boîte postale", "Format optimisé Colissimo", "À partir de 0.65fcfa"),
                    item("Boîte e-commerce", "Fermeture adhésive sécurisée", "À partir de 0.95fcfa"),
                ],
            },
            CatalogCategory {
                category: "Sacs Shopping",
                product_type: ProductType::ShoppingBags,
                items: vec![
                    item("Sac kraft poignées torsadées", "Papier 110g recyclable", "À partir de 0.45fcfa"),
                    item("Sac luxe mat", "Pelliculage soft-touch", "À partir de 1.20fcfa"),
                    item("Sac boutique personnalisé", "Impression quadri", "À partir de 0.75fcfa"),
                ],
            },
            CatalogCategory {
                category: "Coffrets Premium",
                product_type: ProductType::PremiumGiftBoxes,
                items: vec![
                    item("Coffret magnétique", "Fermeture aimantée invisible", "À partir de 4.50fcfa"),
                    item("Écrin rigide", "Garnissage mousse sur-mesure", "À partir de 6.80fcfa"),
                    item("Coffret cloche", "Finition gainée luxe", "À partir de 8.50fcfa"),
                ],
            },
            CatalogCategory {
                category: "Boîtes Pliantes",
                product_type: ProductType::FoldingBoxes,
                items: vec![
                    item("Étui carton compact", "Montage automatique", "À partir de 0.35fcfa"),
                    item("Boîte à fenêtre", "Fenêtre PET transparent", "À partir de 0.55fcfa"),
                    item("Boîte tiroir", "Ouverture coulissante", "À partir de 0.75fcfa"),
                ],
            },
            CatalogCategory {
                category: "Packaging Alimentaire",
                product_type: ProductType::FoodPackaging,
                items: vec![
                    item("Boîte pâtisserie", "Contact alimentaire certifié", "À partir de 0.40fcfa"),
                    item("Coffret traiteur", "Étanche et isotherme", "À partir de 1.80fcfa"),
                    item("Barquette carton", "Compostable", "À partir de 0.25fcfa"),
                ],
            },
            CatalogCategory {
                category: "Étuis & Fourreaux",
                product_type: ProductType::CasesAndSleeves,
                items: vec![
                    item("Fourreau coulissant", "Pour coffrets et flacons", "À partir de 0.90fcfa"),
                    item("Étui cosmétique", "Finition vernis sélectif", "À partir de 1.10fcfa"),
                    item("Manchon imprimé", "Habillage personnalisé", "À partir de 0.50fcfa"),
                ],
            },
        ];

        let contact = vec![
            ContactCard { title: "Téléphone", content: "+228 91 01 69 78", subtitle: "Du lundi au Dimanche" },
            ContactCard { title: "Email", content: "akgroupe0024@gmail.com", subtitle: "Réponse sous 24h" },
            ContactCard { title: "Adresse", content: "123 L'art du packaging", subtitle: "97 68 40 30 Kpalimé, Togo" },
            ContactCard { title: "Horaires", content: "Du lundi au Dimanche", subtitle: "Réponse sous 24h" },
        ];

        Catalog {
            categories,
            product_types: ProductType::ALL.to_vec(),
            contact,
        }
    }
}
