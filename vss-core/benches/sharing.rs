use ark_babyjubjub::{EdwardsAffine, EdwardsProjective, Fr};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::UniformRand;
use criterion::*;
use rand::Rng;
use vss_core::pedersen::{VsSharer, is_valid};
use vss_core::rs::RsDecoder;
use vss_core::shamir::{Reconstructor, Sharer, open};

fn indices(n: u64) -> Vec<Fr> {
    (1..=n).map(Fr::from).collect()
}

fn sharing_bench(c: &mut Criterion) {
    c.bench_function("Shamir/Share/31-16", |b| {
        let rng = &mut rand::thread_rng();
        let indices = indices(31);
        let mut sharer = Sharer::new(16);
        let mut shares = Vec::with_capacity(31);
        let secret = Fr::rand(rng);

        b.iter(|| {
            sharer
                .share_secret(&mut shares, &indices, secret, 16, rng)
                .expect("threshold fits");
            std::hint::black_box(&shares);
        });
    });

    c.bench_function("Shamir/Open/16", |b| {
        let rng = &mut rand::thread_rng();
        let indices = indices(31);
        let mut sharer = Sharer::new(16);
        let mut shares = Vec::with_capacity(31);
        sharer
            .share_secret(&mut shares, &indices, Fr::rand(rng), 16, rng)
            .expect("threshold fits");
        shares.truncate(16);

        b.iter(|| std::hint::black_box(open(&shares)));
    });

    c.bench_function("Shamir/Reconstructor Open/16", |b| {
        let rng = &mut rand::thread_rng();
        let indices = indices(31);
        let mut sharer = Sharer::new(16);
        let mut shares = Vec::with_capacity(31);
        sharer
            .share_secret(&mut shares, &indices, Fr::rand(rng), 16, rng)
            .expect("threshold fits");
        shares.truncate(16);
        let mut reconstructor = Reconstructor::new(&indices);

        b.iter(|| std::hint::black_box(reconstructor.open(&shares).expect("well-formed shares")));
    });

    c.bench_function("VSS/Share/20-10", |b| {
        let rng = &mut rand::thread_rng();
        let indices = indices(20);
        let h = (EdwardsAffine::generator() * Fr::rand(rng)).into_affine();
        let mut sharer = VsSharer::<EdwardsProjective>::new(10);
        let mut shares = Vec::with_capacity(20);
        let secret = Fr::rand(rng);

        b.iter(|| {
            let commitment = sharer
                .vshare_secret(&mut shares, &indices, h, secret, 10, rng)
                .expect("threshold fits");
            std::hint::black_box(commitment);
        });
    });

    c.bench_function("VSS/Verify/10", |b| {
        let rng = &mut rand::thread_rng();
        let indices = indices(20);
        let h = (EdwardsAffine::generator() * Fr::rand(rng)).into_affine();
        let mut sharer = VsSharer::<EdwardsProjective>::new(10);
        let mut shares = Vec::with_capacity(20);
        let commitment = sharer
            .vshare_secret(&mut shares, &indices, h, Fr::rand(rng), 10, rng)
            .expect("threshold fits");

        b.iter(|| std::hint::black_box(is_valid(h, &commitment, &shares[7])));
    });

    c.bench_function("RS/Decode/15-6 with 4 errors", |b| {
        let rng = &mut rand::thread_rng();
        let indices = indices(15);
        let mut decoder = RsDecoder::new(&indices, 6);
        let coeffs: Vec<Fr> = (0..6).map(|_| Fr::rand(rng)).collect();
        let mut values: Vec<Fr> = indices
            .iter()
            .map(|&x| coeffs.iter().rev().fold(Fr::from(0u64), |acc, c| acc * x + c))
            .collect();
        for _ in 0..4 {
            let pos = rng.gen_range(0..15);
            values[pos] = Fr::rand(rng);
        }

        b.iter(|| {
            std::hint::black_box(decoder.decode(&values));
        });
    });
}

criterion_group!(benches, sharing_bench);
criterion_main!(benches);
