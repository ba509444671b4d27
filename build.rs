fn main() {
    println!("cargo:rerun-if-changed=proto/principal_resolution.proto");

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["proto/principal_resolution.proto"], &["proto"])
        .expect("failed to compile principal resolution proto");
}
