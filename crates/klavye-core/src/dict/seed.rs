/// Built-in vocabulary loaded by [`super::Dictionary::with_seed`].
///
/// Common words carry an elevated starting frequency; everything else starts
/// at 1 and is ordered by its position here.
pub static SEED_WORDS: &[(&str, u32)] = &[
    ("merhaba", 20),
    ("evet", 18),
    ("hayır", 18),
    ("bir", 15),
    ("ve", 15),
    ("bu", 14),
    ("ne", 14),
    ("iyi", 14),
    ("ben", 13),
    ("sen", 12),
    ("teşekkür", 16),
    ("tamam", 16),
    ("günaydın", 12),
    ("nasılsın", 12),
    ("ederim", 10),
    ("lütfen", 10),
    ("selam", 10),
    ("için", 10),
    ("çok", 10),
    ("var", 9),
    ("yok", 9),
    ("gibi", 8),
    ("daha", 8),
    ("ama", 8),
    ("şimdi", 8),
    ("de", 7),
    ("da", 7),
    ("ki", 7),
    ("mi", 7),
    ("biz", 6),
    ("siz", 6),
    ("onlar", 6),
    ("gel", 6),
    ("git", 6),
    ("ev", 5),
    ("iş", 5),
    ("su", 5),
    ("yol", 5),
    ("gün", 5),
    ("akşam", 4),
    ("sabah", 4),
    ("bugün", 4),
    ("yarın", 4),
    ("dün", 4),
    ("saat", 4),
    ("zaman", 3),
    ("kadar", 3),
    ("sonra", 3),
    ("önce", 3),
    ("neden", 3),
    ("nerede", 3),
    ("nasıl", 3),
    ("kim", 3),
    ("hangi", 2),
    ("geldi", 2),
    ("gelmek", 2),
    ("gitmek", 2),
    ("geliyorum", 2),
    ("gidiyorum", 2),
    ("anne", 2),
    ("baba", 2),
    ("kardeş", 2),
    ("arkadaş", 2),
    ("okul", 1),
    ("ödev", 1),
    ("kitap", 1),
    ("kalem", 1),
    ("defter", 1),
    ("masa", 1),
    ("kapı", 1),
    ("pencere", 1),
    ("araba", 1),
    ("otobüs", 1),
    ("şehir", 1),
    ("köy", 1),
    ("deniz", 1),
    ("dağ", 1),
    ("ağaç", 1),
    ("çiçek", 1),
    ("kedi", 1),
    ("köpek", 1),
    ("kuş", 1),
    ("balık", 1),
    ("ekmek", 1),
    ("peynir", 1),
    ("çay", 1),
    ("kahve", 1),
    ("yemek", 1),
    ("içmek", 1),
    ("uyumak", 1),
    ("okumak", 1),
    ("yazmak", 1),
    ("konuşmak", 1),
    ("bilmek", 1),
    ("istemek", 1),
    ("sevmek", 1),
    ("görmek", 1),
    ("bakmak", 1),
    ("almak", 1),
    ("vermek", 1),
    ("yapmak", 1),
    ("etmek", 1),
    ("olmak", 1),
    ("güzel", 1),
    ("büyük", 1),
    ("küçük", 1),
    ("yeni", 1),
    ("eski", 1),
    ("sıcak", 1),
    ("soğuk", 1),
    ("hızlı", 1),
    ("yavaş", 1),
    ("doğru", 1),
    ("yanlış", 1),
    ("kolay", 1),
    ("zor", 1),
    ("mutlu", 1),
    ("üzgün", 1),
    ("hemen", 1),
    ("belki", 1),
    ("sadece", 1),
    ("bazen", 1),
    ("her", 1),
    ("hiç", 1),
    ("ile", 1),
    ("veya", 1),
    ("çünkü", 1),
    ("eğer", 1),
    ("görüşürüz", 1),
    ("hoşça", 1),
    ("kal", 1),
    ("akşamlar", 1),
    ("geceler", 1),
    ("türkiye", 1),
    ("istanbul", 1),
    ("ankara", 1),
    ("izmir", 1),
    ("ışık", 1),
    ("ılık", 1),
    ("öğrenci", 1),
    ("öğretmen", 1),
    ("üniversite", 1),
    ("telefon", 1),
    ("mesaj", 1),
    ("klavye", 1),
];
