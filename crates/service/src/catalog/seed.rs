use models::Concept;

/// The built-in seed set, in upsert order.
pub fn seed_concepts() -> Vec<Concept> {
    vec![
        Concept::new(
            "C001",
            "Hypertension",
            "A condition in which the force of the blood against the artery walls is too high.",
            &["P001", "P002"],
            &["C002", "C003"],
            "High Blood Pressure",
        ),
        Concept::new(
            "C002",
            "Diabetes Mellitus",
            "A disease that occurs when your blood glucose, also called blood sugar, is too high.",
            &["P003"],
            &["C004", "C005"],
            "Diabetes",
        ),
        Concept::new(
            "C003",
            "Asthma",
            "A condition in which your airways narrow and swell and may produce extra mucus.",
            &["P004"],
            &["C006"],
            "Bronchial Asthma",
        ),
        Concept::new(
            "C004",
            "Chronic Kidney Disease",
            "A condition characterized by a gradual loss of kidney function over time.",
            &["P002"],
            &["C005", "C006"],
            "CKD",
        ),
        Concept::new(
            "C005",
            "Alzheimer's Disease",
            "A progressive disease that destroys memory and other important mental functions.",
            &["P005"],
            &[],
            "Alzheimer's",
        ),
        Concept::new(
            "C006",
            "Parkinson's Disease",
            "A disorder of the central nervous system that affects movement, often including tremors.",
            &["P006"],
            &[],
            "Parkinson's",
        ),
        Concept::new(
            "C007",
            "Coronary Artery Disease",
            "A disease caused by the buildup of plaque resulting in the arteries to become hardened and narrowed.",
            &["P001"],
            &["C008"],
            "CAD",
        ),
        Concept::new(
            "C008",
            "Stroke",
            "Occurs when the blood supply to part of your brain is reduced, preventing brain tissue from getting oxygen.",
            &["P003"],
            &[],
            "Cerebrovascular Accident",
        ),
        Concept::new(
            "C009",
            "Chronic Obstructive Pulmonary Disease",
            "A group of lung diseases that block airflow and make it difficult to breathe.",
            &["P004"],
            &["C010"],
            "COPD",
        ),
        Concept::new(
            "C010",
            "Lung Cancer",
            "A type of cancer that begins in the lungs.",
            &["P007"],
            &[],
            "Pulmonary Carcinoma",
        ),
    ]
}
