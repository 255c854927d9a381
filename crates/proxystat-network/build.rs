//! Proto 코드 생성 빌드 스크립트
//!
//! `regenerate-protos` feature 활성화 시 tonic-prost-build로 `src/proto/generated/`를 다시 만든다.
//! 응답 메시지의 protojson serde 속성도 여기서 주입하므로 생성 파일을 직접 고치지 않는다.

fn main() {
    #[cfg(feature = "regenerate-protos")]
    compile_protos();
}

#[cfg(feature = "regenerate-protos")]
const PACKAGE: &str = ".xray.app.stats.command";

/// (메시지, 필드, 64비트 여부)
#[cfg(feature = "regenerate-protos")]
const SERIALIZED_FIELDS: &[(&str, &str, bool)] = &[
    ("SysStatsResponse", "NumGoroutine", false),
    ("SysStatsResponse", "NumGC", false),
    ("SysStatsResponse", "Alloc", true),
    ("SysStatsResponse", "TotalAlloc", true),
    ("SysStatsResponse", "Sys", true),
    ("SysStatsResponse", "Mallocs", true),
    ("SysStatsResponse", "Frees", true),
    ("SysStatsResponse", "LiveObjects", true),
    ("SysStatsResponse", "PauseTotalNs", true),
    ("SysStatsResponse", "Uptime", false),
    ("Stat", "name", false),
    ("Stat", "value", true),
    ("QueryStatsResponse", "stat", false),
];

#[cfg(feature = "regenerate-protos")]
fn compile_protos() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let proto_root = std::path::Path::new(&manifest_dir).join("proto");
    let proto = proto_root.join("stats.proto");

    let out_dir = std::path::Path::new(&manifest_dir).join("src/proto/generated");
    std::fs::create_dir_all(&out_dir).expect("Failed to create output directory");

    let mut builder = tonic_prost_build::configure()
        .build_client(true)
        // 서버는 통합 테스트의 mock에서 사용
        .build_server(true)
        .out_dir(&out_dir);

    for message in ["SysStatsResponse", "Stat", "QueryStatsResponse"] {
        builder = builder.type_attribute(
            format!("{PACKAGE}.{message}"),
            "#[derive(::serde::Serialize)]",
        );
    }

    for (message, field, wide) in SERIALIZED_FIELDS {
        let attribute = if *wide {
            format!(
                "#[serde(rename = \"{field}\", skip_serializing_if = \"crate::proto::protojson::is_default\", serialize_with = \"crate::proto::protojson::as_string\")]"
            )
        } else {
            format!(
                "#[serde(rename = \"{field}\", skip_serializing_if = \"crate::proto::protojson::is_default\")]"
            )
        };
        builder = builder.field_attribute(format!("{PACKAGE}.{message}.{field}"), attribute);
    }

    builder
        .compile_protos(&[&proto], &[&proto_root])
        .expect("Failed to compile protos");

    println!("cargo:rerun-if-changed={}", proto.display());
}
