use kubegen::GenerationRequest;

fn main() {
    divan::main();
}

fn request(images: usize) -> GenerationRequest {
    GenerationRequest::new(
        "bench",
        (0..images).map(|i| format!("registry.example.com/team/image{i}:v{i}@sha256:{i:064x}")),
    )
}

#[divan::bench(args = [1, 16, 256])]
fn generate_pod(bencher: divan::Bencher, images: usize) {
    bencher
        .with_inputs(|| request(images))
        .bench_values(|request| kubegen::generate_pod("v1", request).unwrap());
}

#[divan::bench]
fn render_pod_yaml(bencher: divan::Bencher) {
    let pod = kubegen::generate_pod("v1", request(16)).unwrap();
    bencher.bench(|| serde_yaml::to_string(divan::black_box(&pod)).unwrap());
}
