use crate::map::models::CitySeed;

pub fn french_cities() -> Vec<CitySeed> {
    vec![
        CitySeed::new("Paris", 48.8566, 2.3522),
        CitySeed::new("Marseille", 43.2965, 5.3698),
        CitySeed::new("Lyon", 45.7640, 4.8357),
        CitySeed::new("Toulouse", 43.6047, 1.4442),
        CitySeed::new("Nice", 43.7102, 7.2620),
        CitySeed::new("Nantes", 47.2184, -1.5536),
        CitySeed::new("Montpellier", 43.6108, 3.8767),
        CitySeed::new("Strasbourg", 48.5734, 7.7521),
        CitySeed::new("Bordeaux", 44.8378, -0.5792),
        CitySeed::new("Lille", 50.6292, 3.0573),
        CitySeed::new("Rennes", 48.1173, -1.6778),
        CitySeed::new("Reims", 49.2583, 4.0317),
        CitySeed::new("Toulon", 43.1242, 5.9280),
        CitySeed::new("Saint-Étienne", 45.4397, 4.3872),
        CitySeed::new("Le Havre", 49.4944, 0.1079),
        CitySeed::new("Grenoble", 45.1885, 5.7245),
        CitySeed::new("Dijon", 47.3220, 5.0415),
        CitySeed::new("Angers", 47.4784, -0.5632),
        CitySeed::new("Nîmes", 43.8367, 4.3601),
        CitySeed::new("Clermont-Ferrand", 45.7772, 3.0870),
        CitySeed::new("Le Mans", 48.0061, 0.1996),
        CitySeed::new("Aix-en-Provence", 43.5297, 5.4474),
        CitySeed::new("Brest", 48.3904, -4.4861),
        CitySeed::new("Tours", 47.3941, 0.6848),
        CitySeed::new("Amiens", 49.8941, 2.2958),
        CitySeed::new("Limoges", 45.8336, 1.2611),
        CitySeed::new("Perpignan", 42.6887, 2.8948),
        CitySeed::new("Metz", 49.1193, 6.1757),
        CitySeed::new("Besançon", 47.2378, 6.0241),
        CitySeed::new("Orléans", 47.9030, 1.9093),
        CitySeed::new("Rouen", 49.4432, 1.0999),
        CitySeed::new("Caen", 49.1829, -0.3707),
        CitySeed::new("Nancy", 48.6921, 6.1844),
        CitySeed::new("Poitiers", 46.5802, 0.3404),
        CitySeed::new("Pau", 43.2951, -0.3708),
        CitySeed::new("La Rochelle", 46.1603, -1.1511),
        CitySeed::new("Annecy", 45.8992, 6.1294),
        CitySeed::new("Ajaccio", 41.9192, 8.7386),
        CitySeed::new("Bastia", 42.6973, 9.4509),
    ]
}
