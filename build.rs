fn main() {
    // Rerun if frontend changes
    println!("cargo:rerun-if-changed=frontend/");

    // rust-embed needs the folder to exist; create a placeholder page if
    // the dashboard assets are missing.
    let frontend_path = std::path::Path::new("frontend");
    if !frontend_path.exists() {
        eprintln!("Warning: frontend/ directory not found, generating placeholder.");

        std::fs::create_dir_all("frontend").ok();
        std::fs::write(
            "frontend/index.html",
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Statusboard</title>
    <style>
        body { font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: #1a1a2e; color: #eee; }
    </style>
</head>
<body>
    <div>
        <h1>Statusboard</h1>
        <p>API is running. Dashboard assets not embedded.</p>
    </div>
</body>
</html>"#,
        )
        .ok();
    }
}
