//! Static string table.

use crate::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Entries = &'static [(&'static str, &'static str)];

const AR: Entries = &[
    // Header
    ("search.placeholder", "ابحث عن المنتجات..."),
    ("cart", "السلة"),
    ("contact.phone", "اتصل بنا: "),
    ("language.switch", "Français"),
    // Login / signup
    ("login.title", "تسجيل الدخول"),
    ("login.button", "دخول"),
    ("login.successMessage", "تم تسجيل الدخول بنجاح!"),
    ("login.invalidCredentials", "اسم المستخدم أو كلمة المرور غير صحيحة"),
    ("signup.title", "إنشاء حساب"),
    ("signup.successMessage", "تم إنشاء الحساب بنجاح!"),
    ("signup.userExists", "اسم المستخدم أو البريد الإلكتروني مستخدم بالفعل"),
    ("logout.title", "تسجيل الخروج"),
    // Categories
    ("categories.title", "التصنيفات"),
    // Products
    ("products.title", "المنتجات"),
    ("products.add.cart", "أضف إلى السلة"),
    ("products.order.now", "اطلب الآن"),
    ("products.price", "السعر"),
    ("products.old.price", "السعر السابق"),
    ("products.discount", "خصم {percent}%"),
    ("products.usage", "طريقة الاستعمال"),
    ("products.flavors", "النكهات المتوفرة"),
    ("products.sizes", "الأحجام المتوفرة"),
    ("products.flavor", "النكهة"),
    ("products.size", "الحجم"),
    ("products.out.of.stock", "غير متوفر"),
    ("products.none", "لا توجد منتجات"),
    // Cart
    ("cart.title", "سلة التسوق"),
    ("cart.empty", "السلة فارغة"),
    ("cart.quantity", "الكمية"),
    ("cart.remove", "إزالة"),
    ("cart.total", "الإجمالي"),
    ("cart.checkout", "إتمام الطلب"),
    // Checkout
    ("checkout.title", "إتمام الطلب"),
    ("checkout.full.name", "الاسم الكامل"),
    ("checkout.phone", "رقم الهاتف"),
    ("checkout.wilaya", "الولاية"),
    ("checkout.commune", "البلدية"),
    ("checkout.shipping", "خيارات التوصيل"),
    ("checkout.home.delivery", "توصيل للمنزل"),
    ("checkout.office.delivery", "توصيل لمكتب التوصيل"),
    ("checkout.shipping.cost", "تكلفة التوصيل"),
    ("checkout.cash.delivery", "الدفع عند الاستلام"),
    ("checkout.submit", "تأكيد الطلب"),
    ("checkout.incomplete", "يرجى ملء جميع الحقول المطلوبة"),
    ("checkout.error", "حدث خطأ في إرسال الطلب. يرجى المحاولة مرة أخرى."),
    ("checkout.placed", "تم إرسال الطلب!"),
    ("checkout.placed.desc", "تم توجيهك لتطبيق WhatsApp لتأكيد الطلب"),
    // Order message
    ("message.header", "طلب جديد من متجر {storeName}"),
    ("message.name", "الاسم"),
    ("message.phone", "الهاتف"),
    ("message.wilaya", "الولاية"),
    ("message.commune", "البلدية"),
    ("message.shipping", "نوع التوصيل"),
    ("message.products", "المنتجات"),
    ("message.subtotal", "سعر المنتجات"),
    ("message.shipping.cost", "سعر التوصيل"),
    ("message.total", "المجموع الكلي"),
    // Orders
    ("order.status.pending", "في الانتظار"),
    ("order.status.confirmed", "مؤكد"),
    ("order.status.shipped", "تم الشحن"),
    ("order.status.delivered", "تم التسليم"),
    ("order.number", "طلب #{ref}"),
    // Footer
    ("footer.copyright", "© {year} {storeName}. جميع الحقوق محفوظة."),
    ("footer.made.with.love", "صُنع بـ ❤️ في الجزائر"),
    // Admin
    ("admin.title", "لوحة التحكم"),
    ("admin.orders", "إدارة الطلبيات"),
    ("admin.products", "إدارة المنتجات"),
    ("admin.categories", "إدارة الأصناف"),
    ("admin.advertisements", "إدارة الإعلانات"),
    ("admin.pages", "إدارة الصفحات"),
    ("admin.settings", "الإعدادات"),
    ("admin.users", "إدارة المستخدمين"),
    ("admin.users.cannotDeleteSelf", "لا يمكنك حذف حسابك الخاص"),
    ("admin.users.cannotDeleteDefaultAdmin", "لا يمكن حذف المدير الافتراضي"),
];

const FR: Entries = &[
    // Header
    ("search.placeholder", "Rechercher des produits..."),
    ("cart", "Panier"),
    ("contact.phone", "Appelez-nous: "),
    ("language.switch", "العربية"),
    // Login / signup
    ("login.title", "Connexion"),
    ("login.button", "Se connecter"),
    ("login.successMessage", "Connexion réussie !"),
    ("login.invalidCredentials", "Nom d'utilisateur ou mot de passe incorrect"),
    ("signup.title", "Créer un compte"),
    ("signup.successMessage", "Compte créé avec succès !"),
    ("signup.userExists", "Nom d'utilisateur ou email déjà utilisé"),
    ("logout.title", "Déconnexion"),
    // Categories
    ("categories.title", "Catégories"),
    // Products
    ("products.title", "Produits"),
    ("products.add.cart", "Ajouter au panier"),
    ("products.order.now", "Commander maintenant"),
    ("products.price", "Prix"),
    ("products.old.price", "Ancien prix"),
    ("products.discount", "Remise {percent}%"),
    ("products.usage", "Mode d'emploi"),
    ("products.flavors", "Saveurs disponibles"),
    ("products.sizes", "Tailles disponibles"),
    ("products.flavor", "Saveur"),
    ("products.size", "Taille"),
    ("products.out.of.stock", "Rupture de stock"),
    ("products.none", "Aucun produit"),
    // Cart
    ("cart.title", "Panier d'achat"),
    ("cart.empty", "Le panier est vide"),
    ("cart.quantity", "Quantité"),
    ("cart.remove", "Retirer"),
    ("cart.total", "Total"),
    ("cart.checkout", "Passer commande"),
    // Checkout
    ("checkout.title", "Finaliser la commande"),
    ("checkout.full.name", "Nom complet"),
    ("checkout.phone", "Téléphone"),
    ("checkout.wilaya", "Wilaya"),
    ("checkout.commune", "Commune"),
    ("checkout.shipping", "Options de livraison"),
    ("checkout.home.delivery", "Livraison à domicile"),
    ("checkout.office.delivery", "Livraison au bureau"),
    ("checkout.shipping.cost", "Coût de livraison"),
    ("checkout.cash.delivery", "Paiement à la livraison"),
    ("checkout.submit", "Confirmer la commande"),
    ("checkout.incomplete", "Veuillez remplir tous les champs obligatoires"),
    ("checkout.error", "Erreur lors de l'envoi de la commande. Veuillez réessayer."),
    ("checkout.placed", "Commande envoyée !"),
    ("checkout.placed.desc", "Vous avez été redirigé vers WhatsApp pour confirmer la commande"),
    // Order message
    ("message.header", "Nouvelle commande de {storeName}"),
    ("message.name", "Nom"),
    ("message.phone", "Téléphone"),
    ("message.wilaya", "Wilaya"),
    ("message.commune", "Commune"),
    ("message.shipping", "Type de livraison"),
    ("message.products", "Produits"),
    ("message.subtotal", "Prix des produits"),
    ("message.shipping.cost", "Prix de livraison"),
    ("message.total", "Total général"),
    // Orders
    ("order.status.pending", "En attente"),
    ("order.status.confirmed", "Confirmée"),
    ("order.status.shipped", "Expédiée"),
    ("order.status.delivered", "Livrée"),
    ("order.number", "Commande #{ref}"),
    // Footer
    ("footer.copyright", "© {year} {storeName}. Tous droits réservés."),
    ("footer.made.with.love", "Fait avec ❤️ en Algérie"),
    // Admin
    ("admin.title", "Panneau d'administration"),
    ("admin.orders", "Gestion des commandes"),
    ("admin.products", "Gestion des produits"),
    ("admin.categories", "Gestion des catégories"),
    ("admin.advertisements", "Gestion des publicités"),
    ("admin.pages", "Gestion des pages"),
    ("admin.settings", "Paramètres"),
    ("admin.users", "Gestion des utilisateurs"),
    ("admin.users.cannotDeleteSelf", "Vous ne pouvez pas supprimer votre propre compte"),
    ("admin.users.cannotDeleteDefaultAdmin", "L'administrateur par défaut ne peut pas être supprimé"),
];

static TABLE: Lazy<HashMap<Language, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(Language::Ar, AR.iter().copied().collect());
    table.insert(Language::Fr, FR.iter().copied().collect());
    table
});

/// Look up `key` in `language`, falling back to the key itself.
pub fn t(language: Language, key: &str) -> &str {
    TABLE
        .get(&language)
        .and_then(|strings| strings.get(key).copied())
        .unwrap_or(key)
}

/// Look up `key` and replace each `{name}` placeholder with its parameter.
pub fn t_with(language: Language, key: &str, params: &[(&str, &str)]) -> String {
    let mut translation = t(language, key).to_string();
    for (name, value) in params {
        translation = translation.replace(&format!("{{{}}}", name), value);
    }
    translation
}

/// Whether the table defines `key` for `language`.
pub fn has_key(language: Language, key: &str) -> bool {
    TABLE
        .get(&language)
        .map(|strings| strings.contains_key(key))
        .unwrap_or(false)
}
