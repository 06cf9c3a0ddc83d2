//! # Mock Content
//!
//! Static lookup tables standing in for a real workspace: the sample project
//! tree, the canned snippet per language, the bottom-panel console and
//! problem lists, and the copy of the marketing pages.
//!
//! Nothing here is parsed or validated. Unknown languages fall back to
//! [`NO_PREVIEW`].

use super::panel::{FileRef, Language};

pub const NO_PREVIEW: &str = "// No preview available";

pub const PYTHON_SAMPLE: &str = r#"# Python Sample
import numpy as np
from typing import List

def calculate_fibonacci(n: int) -> List[int]:
    """Generate Fibonacci sequence up to n terms."""
    if n <= 0:
        return []
    elif n == 1:
        return [0]

    fib = [0, 1]
    for i in range(2, n):
        fib.append(fib[i-1] + fib[i-2])

    return fib

# Example usage
result = calculate_fibonacci(10)
print(f"Fibonacci sequence: {result}")
"#;

pub const JAVASCRIPT_SAMPLE: &str = r#"// JavaScript Sample
import React, { useState, useEffect } from 'react';

const DataFetcher = ({ url }) => {
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState(null);

  useEffect(() => {
    const fetchData = async () => {
      try {
        const response = await fetch(url);
        const result = await response.json();
        setData(result);
      } catch (err) {
        setError(err.message);
      } finally {
        setLoading(false);
      }
    };

    fetchData();
  }, [url]);

  if (loading) return <div>Loading...</div>;
  if (error) return <div>Error: {error}</div>;

  return <div>{JSON.stringify(data, null, 2)}</div>;
};

export default DataFetcher;
"#;

pub const CSS_SAMPLE: &str = r#"/* Modern CSS Styling */
:root {
  --primary-color: #FF79C6;
  --secondary-color: #8BE9FD;
  --background: #0D0D0D;
  --text: #EDEDED;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem;
  background: var(--background);
  color: var(--text);
}

.button {
  padding: 0.75rem 1.5rem;
  background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
  border: none;
  border-radius: 8px;
  color: white;
  font-weight: 600;
  cursor: pointer;
  transition: transform 0.2s ease;
}

.button:hover {
  transform: translateY(-2px);
  box-shadow: 0 10px 20px rgba(255, 121, 198, 0.3);
}
"#;

/// Canned snippet for a language.
pub fn snippet_for(language: Language) -> &'static str {
    match language {
        Language::Python => PYTHON_SAMPLE,
        Language::JavaScript => JAVASCRIPT_SAMPLE,
        Language::Css => CSS_SAMPLE,
        Language::Text | Language::Markdown | Language::Json => NO_PREVIEW,
    }
}

/// What the editor shows: the selected file's snippet, or JavaScript when
/// nothing has been picked yet.
pub fn preview_for(file: Option<&FileRef>) -> (Language, &'static str) {
    let language = file.map_or(Language::JavaScript, |f| f.language);
    (language, snippet_for(language))
}

/// Node of the mock project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Folder {
        name: &'static str,
        children: Vec<TreeNode>,
    },
    File {
        name: &'static str,
        language: Language,
    },
}

impl TreeNode {
    pub fn name(&self) -> &'static str {
        match self {
            TreeNode::Folder { name, .. } | TreeNode::File { name, .. } => name,
        }
    }

    pub fn file_ref(&self) -> Option<FileRef> {
        match self {
            TreeNode::File { name, language } => Some(FileRef::new(*name, *language)),
            TreeNode::Folder { .. } => None,
        }
    }
}

fn file(name: &'static str, language: Language) -> TreeNode {
    TreeNode::File { name, language }
}

pub const PROJECT_NAME: &str = "my-project";

/// The sample workspace shown in the explorer.
pub fn project_tree() -> TreeNode {
    TreeNode::Folder {
        name: PROJECT_NAME,
        children: vec![
            TreeNode::Folder {
                name: "src",
                children: vec![
                    file("App.jsx", Language::JavaScript),
                    file("index.js", Language::JavaScript),
                    file("styles.css", Language::Css),
                ],
            },
            TreeNode::Folder {
                name: "backend",
                children: vec![
                    file("server.py", Language::Python),
                    file("models.py", Language::Python),
                    file("requirements.txt", Language::Text),
                ],
            },
            file("README.md", Language::Markdown),
            file("package.json", Language::Json),
        ],
    }
}

/// File name to language, as listed in the mock tree. Names the tree does not
/// know are classified by extension.
pub fn language_for(file_name: &str) -> Language {
    fn find(node: &TreeNode, file_name: &str) -> Option<Language> {
        match node {
            TreeNode::File { name, language } => (*name == file_name).then_some(*language),
            TreeNode::Folder { children, .. } => {
                children.iter().find_map(|child| find(child, file_name))
            }
        }
    }

    find(&project_tree(), file_name).unwrap_or_else(|| Language::from_extension(file_name))
}

pub const CONSOLE_LINES: [&str; 4] = [
    "[dev-server] listening on http://localhost:3000",
    "[dev-server] compiled 12 modules in 184 ms",
    "[hmr] connected",
    "[hmr] App.jsx updated",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub severity: Severity,
    pub location: &'static str,
    pub message: &'static str,
}

pub const PROBLEMS: [Problem; 3] = [
    Problem {
        severity: Severity::Warning,
        location: "src/App.jsx:6:10",
        message: "'error' is assigned a value but only used in JSX",
    },
    Problem {
        severity: Severity::Warning,
        location: "backend/server.py:2:1",
        message: "'numpy' imported but unused",
    },
    Problem {
        severity: Severity::Error,
        location: "src/styles.css:18:3",
        message: "unknown property 'transiton'",
    },
];

/// One headed block of marketing copy.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub meta: Option<&'static str>,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub title: &'static str,
    pub tagline: &'static str,
    pub sections: &'static [Section],
}

pub const LANDING: Page = Page {
    title: "HENU PS",
    tagline: "A premium IDE experience for the modern developer",
    sections: &[Section {
        heading: "Enter the IDE",
        meta: None,
        body: "Press 5 or Enter to launch the editor. Inside, ctrl+` or ctrl+scroll opens the terminal.",
    }],
};

pub const WORKFLOW: Page = Page {
    title: "Workflow Scenarios",
    tagline: "How HENU PS fits into a working day",
    sections: &[
        Section {
            heading: "Intelligent Code Completion",
            meta: None,
            body: "HENU PS understands your coding patterns and provides context-aware suggestions. Write code faster with AI-powered completions that learn from your style.",
        },
        Section {
            heading: "Multi-Language Support",
            meta: None,
            body: "Seamlessly work across Python, JavaScript, TypeScript, Go, Rust, and 20+ more languages. Switch contexts without friction.",
        },
        Section {
            heading: "Integrated Terminal & AI Assistant",
            meta: None,
            body: "Execute commands, run scripts, and get instant AI help - all without leaving your workspace. Debug faster, code smarter.",
        },
        Section {
            heading: "Real-Time Collaboration",
            meta: None,
            body: "Share your workspace, pair program, and review code together. Built for modern distributed teams.",
        },
    ],
};

pub const BLOG: Page = Page {
    title: "Blog",
    tagline: "Notes from the team",
    sections: &[
        Section {
            heading: "Introducing HENU PS",
            meta: Some("2025-01-15"),
            body: "A new era of code editing begins. HENU PS combines minimalist design with powerful features.",
        },
        Section {
            heading: "The Philosophy Behind HENU",
            meta: Some("2025-01-20"),
            body: "Why we built HENU PS from the ground up. Design decisions that matter.",
        },
        Section {
            heading: "Performance Optimization",
            meta: Some("2025-01-25"),
            body: "How HENU PS achieves lightning-fast performance across large codebases.",
        },
        Section {
            heading: "AI Integration Done Right",
            meta: Some("2025-02-01"),
            body: "Our approach to AI assistance: helpful, not intrusive. Smart, not overbearing.",
        },
        Section {
            heading: "Community & Open Source",
            meta: Some("2025-02-05"),
            body: "Building HENU PS with the community. Open source contributions and roadmap.",
        },
        Section {
            heading: "The Future of IDEs",
            meta: Some("2025-02-10"),
            body: "What comes next? Our vision for the future of development environments.",
        },
    ],
};

pub const RESOURCES: Page = Page {
    title: "Resources",
    tagline: "Guides, shortcuts and references",
    sections: &[
        Section {
            heading: "Getting Started Guide",
            meta: None,
            body: "Download the installer, open a folder or create a new project, then try AI completion (Ctrl+Space) and the integrated terminal (Ctrl+`).",
        },
        Section {
            heading: "Keyboard Shortcuts",
            meta: None,
            body: "Ctrl+P: Quick file open | Ctrl+Shift+P: Command palette | Ctrl+`: Open terminal | F5: Start debugging",
        },
        Section {
            heading: "Extension Development",
            meta: None,
            body: "Scaffold with `henu-cli create-extension`, test in an Extension Development Host, then publish with `henu-cli publish`.",
        },
        Section {
            heading: "Terminal Integration",
            meta: None,
            body: "Use Bash, Zsh, PowerShell, or Fish. Configure tasks in .henu/tasks.json for one-click build, test and deploy workflows.",
        },
    ],
};
