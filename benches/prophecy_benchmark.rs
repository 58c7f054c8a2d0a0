use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use svara::{
    BinarizerParams, FeatureExtractor, LabelBinarizer, LabelGroup, LayerParams, MlpNetwork,
    NetworkParams, PhonemeVocabulary, Prophet,
};

const PHONEMES: &[&str] = &[
    "aṁ", "āṁ", "iṁ", "īṁ", "uṁ", "ūṁ", "ṛṁ", "ṝṁ", "ḷṁ", "ḹṁ", "eṁ", "aiṁ", "oṁ", "auṁ",
    "aṃ", "aḥ", "kaṁ", "khaṁ", "gaṁ", "ghaṁ", "ṅaṁ", "caṁ", "chaṁ", "jaṁ", "jhaṁ", "ñaṁ",
    "ṭaṁ", "ṭhaṁ", "ḍaṁ", "ḍhaṁ", "ṇaṁ", "taṁ", "thaṁ", "daṁ", "dhaṁ", "naṁ", "paṁ", "phaṁ",
    "baṁ", "bhaṁ", "maṁ", "yaṁ", "raṁ", "laṁ", "vaṁ", "śaṁ", "ṣaṁ", "saṁ", "haṁ", "ḻaṁ",
    "kṣaṁ",
];

fn benchmark_vocabulary() -> PhonemeVocabulary {
    PhonemeVocabulary::new(PHONEMES.iter().map(|t| t.to_string()).collect()).unwrap()
}

fn benchmark_network() -> MlpNetwork {
    let sizes = [51usize, 128, 64, 32, 30];
    let layers = sizes
        .windows(2)
        .map(|pair| LayerParams {
            weight: (0..pair[1])
                .map(|o| (0..pair[0]).map(|i| ((o + i) % 7) as f32 * 0.05 - 0.15).collect())
                .collect(),
            bias: vec![0.01; pair[1]],
        })
        .collect();
    MlpNetwork::from_params(NetworkParams {
        input_size: 51,
        hidden_sizes: vec![128, 64, 32],
        output_size: 30,
        layers,
    })
    .unwrap()
}

fn benchmark_binarizer() -> LabelBinarizer {
    let group = |name: &str, count: usize| LabelGroup {
        name: name.to_string(),
        labels: (0..count).map(|i| format!("{}_{}", name, i)).collect(),
    };
    LabelBinarizer::new(BinarizerParams {
        groups: vec![
            group("chakra", 9),
            group("rasa", 6),
            group("bhava", 7),
            group("deva", 8),
        ],
    })
    .unwrap()
}

fn setup_benchmark_prophet() -> Prophet {
    Prophet::builder()
        .with_components(benchmark_vocabulary(), benchmark_network(), benchmark_binarizer())
        .unwrap()
        .build()
        .unwrap()
}

fn bench_extraction(c: &mut Criterion) {
    let extractor = FeatureExtractor::new(Arc::new(benchmark_vocabulary()));
    let mut group = c.benchmark_group("Extraction");

    // Configure sampling
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("short_name", |b| {
        b.iter(|| extractor.extract(black_box("Mahan")).unwrap())
    });

    group.bench_function("full_name", |b| {
        b.iter(|| extractor.extract(black_box("Mahan H R Gowda")).unwrap())
    });

    group.bench_function("long_name", |b| {
        b.iter(|| {
            extractor
                .extract(black_box(
                    "Shrimathi Lakshminarasimha Venkataramanayya Shankaranarayana",
                ))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let prophet = setup_benchmark_prophet();
    let mut group = c.benchmark_group("Prediction");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("predict", |b| {
        b.iter(|| prophet.predict(black_box("Mahan H R Gowda")).unwrap())
    });

    group.bench_function("forward_pass_only", |b| {
        let network = benchmark_network();
        let extractor = FeatureExtractor::new(Arc::new(benchmark_vocabulary()));
        let features = extractor.extract("Mahan H R Gowda").unwrap().vector;
        b.iter(|| network.predict(black_box(&features)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_prediction);
criterion_main!(benches);
