//! The storefront's launch catalog.

use super::{Advertisement, Category, Product, StoreSettings};
use crate::ids::CategoryId;
use crate::money::Money;
use dada_i18n::LocalizedText;

const APPAREL_SIZES: [&str; 5] = ["S", "M", "L", "XL", "XXL"];

fn pexels(photo: u32, width: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w={width}"
    )
}

pub(super) fn settings() -> StoreSettings {
    StoreSettings::default()
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category::new(LocalizedText::new("البروتين", "Protéines"), "🏋️", "#ef4444").with_id("1"),
        Category::new(
            LocalizedText::new("المكملات الغذائية", "Suppléments"),
            "💊",
            "#10b981",
        )
        .with_id("2"),
        Category::new(
            LocalizedText::new("الملابس الرياضية", "Vêtements"),
            "👕",
            "#8b5cf6",
        )
        .with_id("3"),
        Category::new(LocalizedText::new("الفيتامينات", "Vitamines"), "🍊", "#f59e0b").with_id("4"),
    ]
}

pub(super) fn products() -> Vec<Product> {
    vec![
        Product::new(
            LocalizedText::new("واي بروتين جولد ستاندرد", "Whey Protein Gold Standard"),
            Money::new(8500),
            CategoryId::new("1"),
        )
        .with_id("1")
        .with_description(LocalizedText::new(
            "أفضل بروتين واي لبناء العضلات وزيادة القوة. منتج عالي الجودة من أفضل الماركات العالمية، يحتوي على جميع الأحماض الأمينية الأساسية",
            "Meilleure protéine whey pour la construction musculaire et l'augmentation de la force. Produit de haute qualité des meilleures marques mondiales",
        ))
        .with_usage(LocalizedText::new(
            "خذ مغرفة واحدة مع 200 مل من الماء أو الحليب",
            "Prendre 1 dose avec 200ml d'eau ou de lait",
        ))
        .with_old_price(Money::new(10000))
        .with_image(pexels(4162584, 400))
        .with_flavors(["شوكولا", "فانيلا", "فراولة", "موز"])
        .with_sizes(["1كغ", "2.5كغ", "5كغ"]),
        Product::new(
            LocalizedText::new("كرياتين مونوهيدرات", "Créatine Monohydrate"),
            Money::new(3500),
            CategoryId::new("2"),
        )
        .with_id("2")
        .with_description(LocalizedText::new(
            "كرياتين عالي الجودة لزيادة القوة والطاقة أثناء التمرين. يساعد على تحسين الأداء الرياضي وزيادة الكتلة العضلية",
            "Créatine de haute qualité pour plus de force et d'énergie pendant l'entraînement",
        ))
        .with_usage(LocalizedText::new(
            "خذ 5 جرام يومياً مع الماء",
            "Prendre 5g par jour avec de l'eau",
        ))
        .with_image(pexels(4162485, 400))
        .with_sizes(["300جرام", "500جرام", "1كغ"]),
        Product::new(
            LocalizedText::new("تي شيرت تدريب رياضي", "T-shirt d'entraînement"),
            Money::new(2500),
            CategoryId::new("3"),
        )
        .with_id("3")
        .with_description(LocalizedText::new(
            "تي شيرت مريح ومناسب للتدريب الرياضي، مصنوع من أقمشة عالية الجودة تمتص العرق وتوفر الراحة أثناء التمرين",
            "T-shirt confortable pour l'entraînement, fabriqué avec des tissus de haute qualité",
        ))
        .with_usage(LocalizedText::new(
            "مناسب للتدريب اليومي والرياضة، يُنصح بغسله في ماء بارد",
            "Parfait pour l'entraînement quotidien, lavage à l'eau froide recommandé",
        ))
        .with_image(pexels(8844892, 400))
        .with_sizes(APPAREL_SIZES),
        Product::new(
            LocalizedText::new("فيتامين د3", "Vitamine D3"),
            Money::new(1500),
            CategoryId::new("4"),
        )
        .with_id("4")
        .with_description(LocalizedText::new(
            "فيتامين د3 عالي الجودة لتقوية العظام ودعم جهاز المناعة. ضروري للصحة العامة وامتصاص الكالسيوم",
            "Vitamine D3 de haute qualité pour renforcer les os et soutenir le système immunitaire",
        ))
        .with_usage(LocalizedText::new(
            "حبة واحدة يومياً مع الطعام",
            "Prendre 1 comprimé par jour avec un repas",
        ))
        .with_image(pexels(3683107, 400))
        .with_sizes(["60 كبسولة", "120 كبسولة"]),
        Product::new(
            LocalizedText::new("BCAA أحماض أمينية", "BCAA Acides Aminés"),
            Money::new(4200),
            CategoryId::new("2"),
        )
        .with_id("5")
        .with_description(LocalizedText::new(
            "مكمل الأحماض الأمينية المتفرعة السلسلة لتسريع الاستشفاء العضلي ومنع تكسر العضلات أثناء التمرين",
            "Supplément d'acides aminés à chaîne ramifiée pour accélérer la récupération musculaire",
        ))
        .with_usage(LocalizedText::new(
            "خذ 10 جرام قبل أو أثناء أو بعد التمرين",
            "Prendre 10g avant, pendant ou après l'entraînement",
        ))
        .with_old_price(Money::new(5000))
        .with_image(pexels(4162519, 400))
        .with_flavors(["فواكه مشكلة", "عنب", "تفاح أخضر", "برتقال"])
        .with_sizes(["300جرام", "500جرام"]),
        Product::new(
            LocalizedText::new("شورت رياضي للرجال", "Short de sport pour hommes"),
            Money::new(1800),
            CategoryId::new("3"),
        )
        .with_id("6")
        .with_description(LocalizedText::new(
            "شورت رياضي مريح للرجال، مصنوع من أقمشة مرنة وخفيفة الوزن، مثالي لجميع أنواع التمارين الرياضية",
            "Short de sport confortable pour hommes, fabriqué avec des tissus élastiques et légers",
        ))
        .with_usage(LocalizedText::new(
            "مناسب لجميع أنواع الرياضة والتمارين، يُنصح بغسله في ماء بارد",
            "Convient à tous les types de sports et d'exercices",
        ))
        .with_image(pexels(8844891, 400))
        .with_sizes(APPAREL_SIZES),
    ]
}

pub(super) fn advertisements() -> Vec<Advertisement> {
    vec![
        Advertisement::new(
            pexels(1552252, 1200),
            LocalizedText::new(
                "خصم 30% على جميع البروتينات",
                "30% de réduction sur toutes les protéines",
            ),
        )
        .with_id("1"),
        Advertisement::new(
            pexels(1552103, 1200),
            LocalizedText::new(
                "مجموعة جديدة من الملابس الرياضية",
                "Nouvelle collection de vêtements de sport",
            ),
        )
        .with_id("2"),
    ]
}
