//! Fixed rendering vocabularies
//!
//! Every label-to-metadata table used by the assembler lives here: icon
//! glyphs, feature emoji, the badge-eligible tech whitelist, and the
//! per-ecosystem development-setup snippets.

pub(crate) const TECH_ICONS: &[(&str, &str)] = &[
    ("Python", "🐍"),
    ("Node.js", "⬢"),
    ("React", "⚛️"),
    ("React Native", "📱"),
    ("Express.js", "🚀"),
    ("Docker", "🐳"),
    ("Java (Maven)", "☕"),
    ("Make", "🔨"),
    ("Rust", "🦀"),
    ("Go", "🐹"),
    ("Ruby", "💎"),
    ("PHP", "🐘"),
    ("C++", "➕➕"),
    ("C#", "♯"),
    ("TypeScript", "📜"),
    ("Vue.js", "🖖"),
    ("Angular", "🅰️"),
    ("Svelte", "✨"),
    ("Flask", "🍶"),
    ("Django", "🎸"),
    ("Next.js", "next.js"),
    (".NET", "🔷"),
    ("Flutter", "💙"),
    ("Android (Native)", "🤖"),
    ("iOS (Native)", "🍎"),
];

pub(crate) const FEATURE_EMOJIS: &[(&str, &str)] = &[
    ("api", "🌐"),
    ("database", "🗄️"),
    ("auth", "🔐"),
    ("testing", "🧪"),
    ("cli", "💻"),
    ("web", "🕸️"),
    ("mobile", "📱"),
    ("desktop", "🖥️"),
    ("ai", "🧠"),
    ("ml", "🤖"),
    ("blockchain", "⛓️"),
    ("game", "🎮"),
    ("iot", "📶"),
    ("cloud", "☁️"),
    ("microservice", "🧩"),
    ("monolith", "🏛️"),
];

/// Tech labels that get a shields.io badge.
pub(crate) const BADGE_TECH: &[&str] = &[
    "Python",
    "Node.js",
    "React",
    "Express.js",
    "TypeScript",
    "Docker",
    "Next.js",
    "React Native",
    "Flask",
    "Django",
    "Flutter",
    ".NET",
];

pub(crate) fn lookup<'a>(table: &'a [(&str, &str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// A development-setup snippet triggered by any of its tech labels.
pub(crate) struct SetupSnippet {
    pub labels: &'static [&'static str],
    pub text: &'static str,
}

pub(crate) const SETUP_SNIPPETS: &[SetupSnippet] = &[
    SetupSnippet {
        labels: &[
            "Node.js",
            "React",
            "React Native",
            "Next.js",
            "Vue.js",
            "Angular",
            "Svelte",
        ],
        text: "
### Node.js/JavaScript Setup
1. Install Node.js (v18+ recommended)
2. Install dependencies: `npm install` or `yarn install`
3. Start development server: (Check scripts in `package.json`, e.g., `npm run dev`)
",
    },
    SetupSnippet {
        labels: &["Python"],
        text: "
### Python Setup
1. Install Python (v3.8+ recommended)
2. Create a virtual environment: `python -m venv venv`
3. Activate the environment:
   - Windows: `venv\\Scripts\\activate`
   - Unix/MacOS: `source venv/bin/activate`
4. Install dependencies: `pip install -r requirements.txt`
",
    },
    SetupSnippet {
        labels: &["Docker"],
        text: "
### Docker Setup
1. Install Docker
2. Build the image: `docker build -t my-project-name .`
3. Run the container: `docker run -p 3000:3000 my-project-name`
",
    },
    SetupSnippet {
        labels: &["Rust"],
        text: "
### Rust Setup
1. Install Rust (via rustup: https://rustup.rs/)
2. Install dependencies: `cargo build`
3. Run the project: `cargo run`
",
    },
    SetupSnippet {
        labels: &["Go"],
        text: "
### Go Setup
1. Install Go (v1.18+ recommended)
2. Install dependencies: `go mod download`
3. Run the project: `go run .`
",
    },
    SetupSnippet {
        labels: &[".NET"],
        text: "
### .NET Setup
1. Install [.NET SDK](https://dotnet.microsoft.com/)
2. Restore dependencies: `dotnet restore`
3. Build the project: `dotnet build`
4. Run the project: `dotnet run`
",
    },
    SetupSnippet {
        labels: &["Flutter"],
        text: "
### Flutter Setup
1. Install [Flutter SDK](https://flutter.dev/docs/get-started/install)
2. Run: `flutter pub get`
3. Start the app: `flutter run`
",
    },
    SetupSnippet {
        labels: &["Android (Native)"],
        text: "
### Native Android Setup
1. Open project in Android Studio
2. Sync Gradle and build project
3. Run on emulator or connected device
",
    },
    SetupSnippet {
        labels: &["iOS (Native)"],
        text: "
### Native iOS Setup
1. Open Xcode project (.xcodeproj or .xcworkspace)
2. Install dependencies (e.g. via CocoaPods)
3. Build and run on simulator or device
",
    },
    SetupSnippet {
        labels: &["Java (Maven)"],
        text: "
### Java (Maven) Setup
1. Install Java (JDK 11+ recommended)
2. Install Maven
3. Install dependencies: `mvn install`
4. Run the project: `mvn exec:java` or check `pom.xml` for specific run commands
",
    },
];
