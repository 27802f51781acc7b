//! Priority tables driving classification.
//!
//! Each table is an ordered list of (signal, value) pairs. Scans walk the
//! table in declared order and stop at the first signal present, so the
//! order here is the tie-break contract, not an implementation detail.

/// Root-level markers that decide `language: typescript`.
pub const TYPESCRIPT_MARKERS: [&str; 2] = ["tsconfig.json", "tsconfig.base.json"];

/// Lockfile name to package manager, first existing file wins.
pub const LOCKFILES: [(&str, &str); 5] = [
    ("pnpm-lock.yaml", "pnpm"),
    ("bun.lockb", "bun"),
    ("bun.lock", "bun"),
    ("yarn.lock", "yarn"),
    ("package-lock.json", "npm"),
];

/// Marker files that each independently imply a monorepo (boolean OR, not a
/// priority chain).
pub const MONOREPO_MARKERS: [&str; 4] = [
    "pnpm-workspace.yaml",
    "turbo.json",
    "lerna.json",
    "nx.json",
];

pub const FRONTEND_DEPS: [(&str, &str); 9] = [
    ("react", "react"),
    ("react-dom", "react"),
    ("next", "next"),
    ("vue", "vue"),
    ("nuxt", "nuxt"),
    ("svelte", "svelte"),
    ("@sveltejs/kit", "sveltekit"),
    ("solid-js", "solid"),
    ("@angular/core", "angular"),
];

pub const BACKEND_DEPS: [(&str, &str); 5] = [
    ("hono", "hono"),
    ("express", "express"),
    ("fastify", "fastify"),
    ("@nestjs/core", "nestjs"),
    ("koa", "koa"),
];

pub const VALIDATION_DEPS: [(&str, &str); 5] = [
    ("zod", "zod"),
    ("valibot", "valibot"),
    ("joi", "joi"),
    ("yup", "yup"),
    ("ajv", "ajv"),
];

pub const STYLING_DEPS: [(&str, &str); 4] = [
    ("tailwindcss", "tailwind"),
    ("@tailwindcss/postcss", "tailwind"),
    ("styled-components", "styled-components"),
    ("@emotion/react", "emotion"),
];

pub const TESTING_DEPS: [(&str, &str); 5] = [
    ("vitest", "vitest"),
    ("jest", "jest"),
    ("@playwright/test", "playwright"),
    ("cypress", "cypress"),
    ("mocha", "mocha"),
];

pub const ORM_DEPS: [(&str, &str); 8] = [
    ("drizzle-orm", "drizzle"),
    ("prisma", "prisma"),
    ("@prisma/client", "prisma"),
    ("convex", "convex"),
    ("typeorm", "typeorm"),
    ("sequelize", "sequelize"),
    ("kysely", "kysely"),
    ("mongoose", "mongoose"),
];

/// Script name to verification category. The first script present whose
/// category is still unfilled wins; later names never overwrite.
pub const VERIFICATION_SCRIPTS: [(&str, &str); 10] = [
    ("typecheck", "typecheck"),
    ("type-check", "typecheck"),
    ("tsc", "typecheck"),
    ("tsgo", "typecheck"),
    ("check-types", "typecheck"),
    ("lint", "lint"),
    ("eslint", "lint"),
    ("test", "test"),
    ("test:unit", "test"),
    ("build", "build"),
];

/// Lower-cased `apps/` entry names classified as the API directory.
pub const API_DIR_LABELS: [&str; 3] = ["api", "server", "backend"];

/// Lower-cased `apps/` entry names classified as the web directory.
pub const WEB_DIR_LABELS: [&str; 4] = ["web", "app", "client", "frontend"];
